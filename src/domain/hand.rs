use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Улица по числу открытых общих карт (3 → Flop, 4 → Turn, 5 → River).
    pub fn from_board_len(len: usize) -> Option<Street> {
        match len {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

/// Карманные карты одного игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatCards {
    pub player_id: PlayerId,
    pub hole: [Card; 2],
}

impl SeatCards {
    pub const fn new(player_id: PlayerId, hole: [Card; 2]) -> Self {
        Self { player_id, hole }
    }
}

/// Вход шоудауна: 5 общих карт и по 2 карманные у каждого игрока.
///
/// Что все карты разные и id не повторяются — контракт дилера,
/// проверяется в `engine::validation`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundInput {
    pub board: [Card; 5],
    pub seats: Vec<SeatCards>,
}

impl RoundInput {
    pub fn new(board: [Card; 5], seats: Vec<SeatCards>) -> Self {
        Self { board, seats }
    }

    /// Все карты раунда: сначала борд, потом карманные по порядку мест.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.board
            .iter()
            .copied()
            .chain(self.seats.iter().flat_map(|s| s.hole.iter().copied()))
    }
}
