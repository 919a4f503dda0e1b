use log::{debug, trace};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::validation::{ensure_card_count, ensure_distinct};

use super::hand_rank::{HandResult, Kickers};
use super::lookup_tables::{detect_straight, rank_to_bit, top_ranks, RankMask};

/// Главная функция: классифицировать лучшую 5-карточную руку из 2 карманных + 5 общих.
///
/// Количество карт гарантировано типами. Повтор карты — нарушение контракта дилера,
/// падаем сразу с `EngineError::DuplicateCard`, а не выдаём неверную руку.
pub fn classify(hole: [Card; 2], board: [Card; 5]) -> Result<HandResult, EngineError> {
    let cards = [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ];
    ensure_distinct(cards.iter().copied())?;

    let result = evaluate_seven(cards);
    debug!(
        "classify: hole [{} {}] board [{}] -> {}",
        hole[0],
        hole[1],
        join_cards(&board),
        result
    );
    Ok(result)
}

/// То же для срезов (карты из дилера / CLI): дополнительно проверяем количество.
pub fn classify_cards(hole: &[Card], board: &[Card]) -> Result<HandResult, EngineError> {
    ensure_card_count("hole", 2, hole.len())?;
    ensure_card_count("board", 5, board.len())?;

    let hole: [Card; 2] = [hole[0], hole[1]];
    let board: [Card; 5] = [board[0], board[1], board[2], board[3], board[4]];
    classify(hole, board)
}

/// Оценка ровно 7 карт. Порядок карт на входе ни на что не влияет.
fn evaluate_seven(mut cards: [Card; 7]) -> HandResult {
    cards.sort_by(|a, b| b.cmp_rank(a));

    let tally = MatchTally::from_sorted(&cards);
    trace!("matches: {:?}", tally);

    // Ранги всех 7 карт по убыванию (с повторами) — из них набираются кикеры.
    let dealt: Vec<Rank> = cards.iter().map(|c| c.rank).collect();

    if let Some(rank) = tally.quads {
        return HandResult::Quads { rank };
    }

    if let (Some(set), Some(pair)) = (tally.set, tally.pair) {
        return HandResult::FullHouse { set, pair };
    }

    if let Some(made) = straight_or_flush(&cards) {
        return made;
    }

    let kickers = |n: usize| Kickers(unmatched_ranks(&dealt, &tally).take(n).collect());

    if let Some(rank) = tally.set {
        return HandResult::Set {
            rank,
            kickers: kickers(2),
        };
    }

    if let (Some(high), Some(low)) = (tally.pair, tally.low_pair) {
        return HandResult::TwoPair {
            high,
            low,
            kickers: kickers(1),
        };
    }

    if let Some(rank) = tally.pair {
        return HandResult::OnePair {
            rank,
            kickers: kickers(3),
        };
    }

    HandResult::HighCard { ranks: kickers(5) }
}

/// Итог прохода по совпадающим рангам.
///
/// `pair` — старшая пара (или младший из двух сетов), `low_pair` — вторая пара.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MatchTally {
    quads: Option<Rank>,
    set: Option<Rank>,
    pair: Option<Rank>,
    low_pair: Option<Rank>,
}

impl MatchTally {
    /// Карты отсортированы по убыванию ранга, поэтому и ранги
    /// регистрируются от старшего к младшему.
    fn from_sorted(cards: &[Card; 7]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank as usize] += 1;
        }

        let mut tally = MatchTally::default();
        let mut seen: RankMask = 0;
        for card in cards {
            let bit = rank_to_bit(card.rank);
            if seen & bit != 0 {
                continue;
            }
            seen |= bit;

            let count = counts[card.rank as usize];
            if count >= 2 {
                tally.record(card.rank, count);
            }
        }
        tally
    }

    fn record(&mut self, rank: Rank, count: u8) {
        match count {
            2 => match self.pair {
                None => self.pair = Some(rank),
                Some(pair) if rank > pair => {
                    self.low_pair = Some(pair);
                    self.pair = Some(rank);
                }
                Some(pair) if rank < pair => {
                    // Третья пара не затирает младшую, если сама не старше её.
                    if self.low_pair.map_or(true, |low| rank > low) {
                        self.low_pair = Some(rank);
                    }
                }
                Some(_) => {}
            },
            3 => match self.set {
                None => self.set = Some(rank),
                Some(set) if rank > set => {
                    self.low_pair = self.pair;
                    self.pair = Some(set);
                    self.set = Some(rank);
                }
                Some(set) if rank < set => {
                    // Младший сет играет парой фулл-хауса.
                    self.low_pair = self.pair;
                    self.pair = Some(rank);
                }
                Some(_) => {}
            },
            4 => {
                if self.quads.map_or(true, |quads| rank > quads) {
                    self.quads = Some(rank);
                }
            }
            _ => {}
        }
    }

    fn is_matched(&self, rank: Rank) -> bool {
        [self.quads, self.set, self.pair, self.low_pair].contains(&Some(rank))
    }
}

/// Ранги, не занятые совпадениями, по убыванию. Непопавшая третья пара
/// идёт сюда обеими картами.
fn unmatched_ranks<'a>(
    dealt: &'a [Rank],
    tally: &'a MatchTally,
) -> impl Iterator<Item = Rank> + 'a {
    dealt.iter().copied().filter(move |&r| !tally.is_matched(r))
}

/// Стрит-флеш / роял → флеш → стрит.
fn straight_or_flush(cards: &[Card; 7]) -> Option<HandResult> {
    let mut all_mask: RankMask = 0;
    let mut suit_masks: [RankMask; 4] = [0; 4];
    let mut suit_counts = [0u8; 4];

    for card in cards {
        let bit = rank_to_bit(card.rank);
        all_mask |= bit;
        suit_masks[card.suit.index()] |= bit;
        suit_counts[card.suit.index()] += 1;
    }

    // Первая масть с 5+ картами в фиксированном порядке Suit::ALL.
    let flush_suit: Option<Suit> = Suit::ALL
        .iter()
        .copied()
        .find(|s| suit_counts[s.index()] >= 5);

    if let Some(suit) = flush_suit {
        let flush_mask = suit_masks[suit.index()];

        if let Some(high) = detect_straight(flush_mask) {
            return Some(if high == Rank::Ace {
                HandResult::RoyalFlush
            } else {
                HandResult::StraightFlush { high }
            });
        }

        let top = top_ranks(flush_mask, 5);
        return Some(HandResult::Flush {
            ranks: [top[0], top[1], top[2], top[3], top[4]],
        });
    }

    detect_straight(all_mask).map(|high| HandResult::Straight { high })
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
