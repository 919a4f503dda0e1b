use std::collections::HashSet;

use crate::domain::card::Card;
use crate::domain::hand::{RoundInput, SeatCards};
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Проверка, что количество карт совпадает с ожидаемым.
pub fn ensure_card_count(what: &'static str, expected: usize, actual: usize) -> Result<(), EngineError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::WrongCardCount {
            what,
            expected,
            actual,
        })
    }
}

/// Все карты попарно различны. Возвращает первую повторившуюся.
pub fn ensure_distinct(cards: impl IntoIterator<Item = Card>) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(card) {
            return Err(EngineError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Проверка всего раунда перед шоудауном:
/// есть игроки, id не повторяются, карты не повторяются.
pub fn validate_round(round: &RoundInput) -> Result<(), EngineError> {
    if round.seats.is_empty() {
        return Err(EngineError::NoPlayers);
    }
    ensure_unique_players(round.seats.iter().map(|s| s.player_id))?;
    ensure_distinct(round.all_cards())
}

pub fn ensure_unique_players(ids: impl IntoIterator<Item = PlayerId>) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(EngineError::DuplicatePlayer(id));
        }
    }
    Ok(())
}

/// Собрать `RoundInput` из "сырых" списков карт (например, из CLI),
/// проверив количество карт у каждого и весь раунд целиком.
pub fn build_round(
    board: &[Card],
    holes: &[(PlayerId, Vec<Card>)],
) -> Result<RoundInput, EngineError> {
    ensure_card_count("board", 5, board.len())?;

    let mut seats = Vec::with_capacity(holes.len());
    for (player_id, hole) in holes {
        ensure_card_count("hole", 2, hole.len())?;
        seats.push(SeatCards::new(*player_id, [hole[0], hole[1]]));
    }

    let round = RoundInput::new([board[0], board[1], board[2], board[3], board[4]], seats);
    validate_round(&round)?;
    Ok(round)
}
