use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::RoundInput;
use crate::domain::PlayerId;
use crate::engine::{RoundResult, ShowdownOutcome};
use crate::eval::HandCategory;

/// Одно поле ключа тай-брейка в читаемом виде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TieBreakEntryDto {
    pub field: String,
    pub rank: Rank,
    pub name: String,
}

/// Рука игрока в отчёте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerReportDto {
    pub player_id: PlayerId,
    /// Карманные карты строками: "Ah", "Td".
    pub hole_cards: Vec<String>,
    pub category: HandCategory,
    pub description: String,
    pub tie_break: Vec<TieBreakEntryDto>,
    pub is_winner: bool,
}

/// Отчёт о раунде для JSON-вывода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundReportDto {
    pub board: Vec<String>,
    pub players: Vec<PlayerReportDto>,
    pub outcome: ShowdownOutcome,
    pub message: String,
}

/// Помощник: RoundInput + RoundResult → DTO отчёта.
pub fn build_round_report(round: &RoundInput, result: &RoundResult) -> RoundReportDto {
    let players = round
        .seats
        .iter()
        .filter_map(|seat| {
            let hand = result.hand_of(seat.player_id)?;
            Some(PlayerReportDto {
                player_id: seat.player_id,
                hole_cards: cards_to_strings(&seat.hole),
                category: hand.category(),
                description: hand.describe(),
                tie_break: hand
                    .tie_break_key()
                    .into_iter()
                    .map(|(field, rank)| TieBreakEntryDto {
                        field: field.to_string(),
                        rank,
                        name: rank.face_name().to_string(),
                    })
                    .collect(),
                is_winner: result.outcome.is_winner(seat.player_id),
            })
        })
        .collect();

    RoundReportDto {
        board: cards_to_strings(&round.board),
        players,
        outcome: result.outcome.clone(),
        message: result.outcome.message(),
    }
}

fn cards_to_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}
