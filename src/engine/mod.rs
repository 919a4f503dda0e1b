//! Шоудаун: проверка входа, резолв победителей, дилер и история раунда.
//!
//! Основные операции:
//!   - `resolve` – победитель(и) по классифицированным рукам
//!   - `resolve_round` – проверить раунд, классифицировать всех, резолвить
//!   - `Dealer::deal_round` – перемешать колоду и сдать раунд

pub mod dealer;
pub mod errors;
pub mod hand_history;
pub mod outcome;
pub mod showdown;
pub mod validation;

pub use dealer::{DealtRound, Dealer, DealerConfig};
pub use errors::EngineError;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use outcome::ShowdownOutcome;
pub use showdown::{resolve, resolve_round, RoundResult};

/// RNG интерфейс для дилера.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
