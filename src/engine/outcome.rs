use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::PlayerId;
use crate::eval::{HandCategory, HandResult, TieBreakField};

/// Итог шоудауна. Структурированные факты — это контракт,
/// текст (`message()`) — только удобная подача для фронта/CLI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownOutcome {
    /// Победители по возрастанию id. Больше одного — сплит.
    pub winners: Vec<PlayerId>,
    pub category: HandCategory,
    /// Главный ранг выигравшей руки. `None` только у роял-флеша.
    pub primary_rank: Option<Rank>,
    /// Пара фулл-хауса или младшая пара двух пар.
    pub secondary_rank: Option<Rank>,
    /// Поле тай-брейка, на котором остался единственный претендент, и его ранг.
    pub deciding: Option<(TieBreakField, Rank)>,
    pub split_pot: bool,
    /// Рука победителя (при сплите у всех одинаковый ключ).
    pub winning_hand: HandResult,
}

impl ShowdownOutcome {
    pub fn is_winner(&self, player_id: PlayerId) -> bool {
        self.winners.contains(&player_id)
    }

    /// Кикер, решивший исход, если это был именно кикер.
    pub fn deciding_kicker(&self) -> Option<Rank> {
        self.deciding
            .filter(|(field, _)| field.is_kicker())
            .map(|(_, rank)| rank)
    }

    /// Первая строка: кто забрал банк.
    pub fn headline(&self) -> String {
        if self.split_pot {
            let players: Vec<String> = self
                .winners
                .iter()
                .map(|id| format!("Player {id}"))
                .collect();
            format!("Split Pot - {}", players.join(", "))
        } else {
            let id = self.winners.first().copied().unwrap_or_default();
            format!("Player {id} wins!")
        }
    }

    /// Вторая строка: чем выиграли. "Pair of Jacks, Ace kicker", "Royal Flush".
    pub fn hand_line(&self) -> String {
        match self.deciding_kicker() {
            Some(kicker) => format!("{}, {} kicker", self.winning_hand.describe(), kicker.face_name()),
            None => self.winning_hand.describe(),
        }
    }

    pub fn message(&self) -> String {
        format!("{}\n{}", self.headline(), self.hand_line())
    }
}

impl fmt::Display for ShowdownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
