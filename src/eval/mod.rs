//! Классификатор покерных рук (Texas Hold'em, 2 карманные + 5 общих).
//!
//! Основная функция:
//!   `classify(hole, board) -> Result<HandResult, EngineError>`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{classify, classify_cards};
pub use hand_rank::{HandCategory, HandResult, Kickers, TieBreakField, KICKER_FIELDS};
