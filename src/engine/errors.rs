use crate::domain::card::Card;
use crate::domain::PlayerId;

use thiserror::Error;

/// Нарушения контракта на входе классификатора, резолвера и дилера.
///
/// Вычисления чистые и детерминированные: ошибка значит "плохой вход",
/// повторять бессмысленно.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Неверное число карт ({what}): ожидалось {expected}, получено {actual}")]
    WrongCardCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Карта {0} встречается в раунде дважды")]
    DuplicateCard(Card),

    #[error("Нет ни одного игрока для шоудауна")]
    NoPlayers,

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Недостаточно игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Слишком много игроков: {requested}, максимум {max}")]
    TooManyPlayers { requested: usize, max: usize },

    #[error("В колоде закончились карты")]
    DeckExhausted,
}
