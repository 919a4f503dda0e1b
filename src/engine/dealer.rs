//! Дилер: перемешать колоду и сдать полный раунд
//! (карманные → flop → turn → river).
//!
//! Случайность живёт только здесь, через `RandomSource`; классификатор и
//! резолвер получают уже готовый `RoundInput`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{RoundInput, SeatCards, Street};
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::validation::ensure_unique_players;
use crate::engine::RandomSource;

/// Настройки дилера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerConfig {
    /// Сколько игроков можно посадить в раунд.
    pub max_players: usize,
    /// Сжигать карту перед flop/turn/river.
    pub burn_cards: bool,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            max_players: 9,
            burn_cards: true,
        }
    }
}

/// Сданный раунд: вход для шоудауна + история раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealtRound {
    pub round: RoundInput,
    pub burned: Vec<Card>,
    pub history: HandHistory,
}

impl DealtRound {
    pub fn seats(&self) -> Vec<(PlayerId, [Card; 2])> {
        self.round
            .seats
            .iter()
            .map(|s| (s.player_id, s.hole))
            .collect()
    }
}

pub struct Dealer<R: RandomSource> {
    config: DealerConfig,
    rng: R,
}

impl<R: RandomSource> Dealer<R> {
    pub fn new(config: DealerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    /// Сдать полный раунд игрокам в указанном порядке.
    pub fn deal_round(&mut self, players: &[PlayerId]) -> Result<DealtRound, EngineError> {
        if players.is_empty() {
            return Err(EngineError::NotEnoughPlayers);
        }
        if players.len() > self.config.max_players {
            return Err(EngineError::TooManyPlayers {
                requested: players.len(),
                max: self.config.max_players,
            });
        }
        ensure_unique_players(players.iter().copied())?;

        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);

        let mut history = HandHistory::new();
        history.push(HandEventKind::RoundStarted {
            players: players.to_vec(),
        });

        // 1. Карманные: по две подряд каждому, старшая карта первой.
        let mut seats = Vec::with_capacity(players.len());
        for &player_id in players {
            let mut hole = draw::<2>(&mut deck)?;
            hole.sort_by(|a, b| b.cmp_rank(a));
            history.push(HandEventKind::HoleCardsDealt {
                player_id,
                cards: hole,
            });
            seats.push(SeatCards::new(player_id, hole));
        }

        // 2. Улицы.
        let mut burned = Vec::new();
        let mut board = Vec::with_capacity(5);
        for (street, count) in [(Street::Flop, 3), (Street::Turn, 1), (Street::River, 1)] {
            if self.config.burn_cards {
                burned.push(deck.draw_one().ok_or(EngineError::DeckExhausted)?);
                history.push(HandEventKind::CardBurned { before: street });
            }
            let cards = deck.draw_exact(count).ok_or(EngineError::DeckExhausted)?;
            history.push(HandEventKind::BoardDealt {
                street,
                cards: cards.clone(),
            });
            board.extend(cards);
        }

        let board: [Card; 5] = [board[0], board[1], board[2], board[3], board[4]];
        debug!(
            "dealer: {} players, {} cards left in deck",
            players.len(),
            deck.len()
        );

        Ok(DealtRound {
            round: RoundInput::new(board, seats),
            burned,
            history,
        })
    }
}

fn draw<const N: usize>(deck: &mut Deck) -> Result<[Card; N], EngineError> {
    let cards = deck.draw_exact(N).ok_or(EngineError::DeckExhausted)?;
    cards.try_into().map_err(|_| EngineError::DeckExhausted)
}
