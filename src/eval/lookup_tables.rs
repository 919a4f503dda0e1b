use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Пять подряд идущих бит.
const RUN_OF_FIVE: RankMask = 0b1_1111;

/// Wheel: A2345.
pub const WHEEL_MASK: RankMask = mask_from_ranks(&[
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
]);

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Маска стрита со старшей картой `high` (от шестёрки до туза).
const fn straight_mask(high: Rank) -> RankMask {
    RUN_OF_FIVE << (high as u8 - Rank::Six as u8)
}

/// Найти самый старший стрит в маске (5–7 карт, дубликаты рангов уже схлопнуты).
/// Возвращает старшую карту стрита.
///
/// Туз играет снизу только в wheel (A2345) → возвращаем Rank::Five.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    Rank::ALL
        .iter()
        .rev()
        .take_while(|&&high| high >= Rank::Six)
        .find(|&&high| mask & straight_mask(high) == straight_mask(high))
        .copied()
        .or_else(|| (mask & WHEEL_MASK == WHEEL_MASK).then_some(Rank::Five))
}

/// Ранги из маски от старшего к младшему.
pub fn ranks_desc(mask: RankMask) -> impl Iterator<Item = Rank> {
    Rank::ALL
        .iter()
        .rev()
        .copied()
        .filter(move |&r| mask & rank_to_bit(r) != 0)
}

/// Старшие `n` рангов маски (меньше, если в маске меньше бит).
pub fn top_ranks(mask: RankMask, n: usize) -> Vec<Rank> {
    ranks_desc(mask).take(n).collect()
}
