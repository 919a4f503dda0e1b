//! Доменная модель: карты, колода, вход раунда шоудауна.

pub mod card;
pub mod deck;
pub mod hand;

/// Идентификатор игрока в раунде (в сообщениях: "Player {id}").
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
