//! Шоудаун Texas Hold'em: классификация рук и определение победителей.
//!
//! Конвейер в одну сторону:
//!   `domain` (карты) → `eval::classify` (по игроку) → `engine::resolve` (по всем) → `ShowdownOutcome`.
//!
//! Дилер (`engine::dealer`) и CLI — внешние по отношению к ядру: ядро получает
//! готовые 5 общих карт и по 2 карманные на игрока.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, PlayerId, Rank, RoundInput, SeatCards, Suit};
pub use engine::{resolve, resolve_round, EngineError, RoundResult, ShowdownOutcome};
pub use eval::{classify, classify_cards, HandCategory, HandResult, TieBreakField};
