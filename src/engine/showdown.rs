//! Определение победителя(ей) раунда по уже классифицированным рукам.
//!
//! 1. Берём только руки высшей присутствующей категории.
//! 2. Идём по полям ключа тай-брейка этой категории: оставляем тех,
//!    у кого значение поля максимальное.
//! 3. Остался один — он победил. Поля кончились, а претендентов ≥ 2 — сплит.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::RoundInput;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::outcome::ShowdownOutcome;
use crate::engine::validation::{ensure_unique_players, validate_round};
use crate::eval::{classify, HandResult, TieBreakField};

/// Классифицированные руки раунда + итог.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub hands: Vec<(PlayerId, HandResult)>,
    pub outcome: ShowdownOutcome,
}

impl RoundResult {
    pub fn hand_of(&self, player_id: PlayerId) -> Option<&HandResult> {
        self.hands
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, hand)| hand)
    }
}

/// Претендент на банк вместе с его ключом тай-брейка.
struct Contender<'a> {
    player_id: PlayerId,
    hand: &'a HandResult,
    key: Vec<(TieBreakField, Rank)>,
}

/// Резолвер: кто выиграл и почему.
///
/// Пустой вход и повтор игрока — нарушение контракта, победитель
/// "наугад" не выбирается никогда.
pub fn resolve(hands: &[(PlayerId, HandResult)]) -> Result<ShowdownOutcome, EngineError> {
    if hands.is_empty() {
        return Err(EngineError::NoPlayers);
    }
    ensure_unique_players(hands.iter().map(|(id, _)| *id))?;

    let top_category = hands
        .iter()
        .map(|(_, hand)| hand.category())
        .max()
        .ok_or(EngineError::NoPlayers)?;

    let mut contenders: Vec<Contender<'_>> = hands
        .iter()
        .filter(|(_, hand)| hand.category() == top_category)
        .map(|(player_id, hand)| Contender {
            player_id: *player_id,
            hand,
            key: hand.tie_break_key(),
        })
        .collect();
    contenders.sort_by_key(|c| c.player_id);

    trace!(
        "showdown: top category {} held by {} of {} players",
        top_category,
        contenders.len(),
        hands.len()
    );

    let mut deciding = None;
    let mut depth = 0;
    while contenders.len() > 1 {
        // Поле должно быть у всех оставшихся; если у кого-то нет — дальше сравнивать нечем.
        let values: Option<Vec<(TieBreakField, Rank)>> =
            contenders.iter().map(|c| c.key.get(depth).copied()).collect();
        let Some(values) = values else { break };

        let Some(&(field, best)) = values.iter().max_by_key(|(_, rank)| *rank) else {
            break;
        };

        contenders.retain(|c| c.key[depth].1 == best);
        trace!(
            "showdown: {} = {} leaves {} contender(s)",
            field,
            best.face_name(),
            contenders.len()
        );

        if contenders.len() == 1 {
            deciding = Some((field, best));
        }
        depth += 1;
    }

    let winning_hand = contenders[0].hand.clone();
    let outcome = ShowdownOutcome {
        winners: contenders.iter().map(|c| c.player_id).collect(),
        category: top_category,
        primary_rank: winning_hand.primary_rank(),
        secondary_rank: winning_hand.secondary_rank(),
        deciding,
        split_pot: contenders.len() > 1,
        winning_hand,
    };

    debug!(
        "showdown: winners {:?} ({}), split = {}",
        outcome.winners,
        outcome.hand_line(),
        outcome.split_pot
    );
    Ok(outcome)
}

/// Полный шоудаун раунда: проверка входа → классификация каждого игрока → резолв.
pub fn resolve_round(round: &RoundInput) -> Result<RoundResult, EngineError> {
    validate_round(round)?;

    let hands = round
        .seats
        .iter()
        .map(|seat| Ok((seat.player_id, classify(seat.hole, round.board)?)))
        .collect::<Result<Vec<_>, EngineError>>()?;

    let outcome = resolve(&hands)?;
    Ok(RoundResult { hands, outcome })
}
