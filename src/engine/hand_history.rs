use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;
use crate::domain::PlayerId;
use crate::engine::showdown::RoundResult;
use crate::eval::HandResult;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новый раунд: колода перемешана, игроки за столом.
    RoundStarted { players: Vec<PlayerId> },

    /// Игрок получил карманные карты.
    HoleCardsDealt { player_id: PlayerId, cards: [Card; 2] },

    /// Сожжена карта перед улицей.
    CardBurned { before: Street },

    /// Открыты общие карты на борде.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Шоудаун – открытие карт и лучшая рука игрока.
    ShowdownReveal {
        player_id: PlayerId,
        hole_cards: [Card; 2],
        hand: HandResult,
    },

    /// Банк забрали (один игрок или сплит).
    PotAwarded { winners: Vec<PlayerId>, split_pot: bool },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    /// Дописать вскрытие и выплату по результату шоудауна.
    pub fn record_showdown(&mut self, seats: &[(PlayerId, [Card; 2])], result: &RoundResult) {
        for (player_id, hole_cards) in seats {
            if let Some(hand) = result.hand_of(*player_id) {
                self.push(HandEventKind::ShowdownReveal {
                    player_id: *player_id,
                    hole_cards: *hole_cards,
                    hand: hand.clone(),
                });
            }
        }
        self.push(HandEventKind::PotAwarded {
            winners: result.outcome.winners.clone(),
            split_pot: result.outcome.split_pot,
        });
    }

    /// Последняя открытая улица.
    pub fn street_reached(&self) -> Street {
        self.events
            .iter()
            .rev()
            .find_map(|e| match &e.kind {
                HandEventKind::PotAwarded { .. } => Some(Street::Showdown),
                HandEventKind::BoardDealt { street, .. } => Some(*street),
                _ => None,
            })
            .unwrap_or(Street::Preflop)
    }
}
