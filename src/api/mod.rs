//! Внешнее представление результатов шоудауна.
//!
//! - DTO (dto.rs) — сериализуемый отчёт о раунде для фронта / JSON-вывода CLI.

pub mod dto;

pub use dto::*;
