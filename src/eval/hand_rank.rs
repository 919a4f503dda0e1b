use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
///
/// Порядок вариантов = порядок силы (derive(Ord)):
/// `RoyalFlush > StraightFlush > Quads > ... > HighCard`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    Set = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL_DESC: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::Quads,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::Set,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::Quads => "Quads",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::Set => "Set",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Поле ключа тай-брейка. Порядок полей внутри категории задаёт приоритет сравнения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TieBreakField {
    /// Главный ранг категории (ранг сета, старшей пары, верх стрита и т.д.).
    Primary(HandCategory),
    /// Пара внутри фулл-хауса.
    FullHousePair,
    /// Младшая пара в двух парах.
    LowPair,
    HighCard,
    SecondKicker,
    ThirdKicker,
    FourthKicker,
    FifthKicker,
}

/// Кикеры по старшинству: "High Card", "Second Kicker" ... "Fifth Kicker".
pub const KICKER_FIELDS: [TieBreakField; 5] = [
    TieBreakField::HighCard,
    TieBreakField::SecondKicker,
    TieBreakField::ThirdKicker,
    TieBreakField::FourthKicker,
    TieBreakField::FifthKicker,
];

impl TieBreakField {
    pub const fn name(self) -> &'static str {
        match self {
            TieBreakField::Primary(category) => category.name(),
            TieBreakField::FullHousePair => "One Pair",
            TieBreakField::LowPair => "Low Pair",
            TieBreakField::HighCard => "High Card",
            TieBreakField::SecondKicker => "Second Kicker",
            TieBreakField::ThirdKicker => "Third Kicker",
            TieBreakField::FourthKicker => "Fourth Kicker",
            TieBreakField::FifthKicker => "Fifth Kicker",
        }
    }

    /// Поле-кикер (а не ранг самой комбинации).
    pub const fn is_kicker(self) -> bool {
        matches!(
            self,
            TieBreakField::HighCard
                | TieBreakField::SecondKicker
                | TieBreakField::ThirdKicker
                | TieBreakField::FourthKicker
                | TieBreakField::FifthKicker
        )
    }
}

impl fmt::Display for TieBreakField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Кикеры от старшего к младшему. Хранятся только реально оставшиеся карты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Kickers(pub Vec<Rank>);

impl Kickers {
    pub fn as_slice(&self) -> &[Rank] {
        &self.0
    }
}

/// Результат классификации руки: категория + ровно её поля тай-брейка.
///
/// Нулевых/заглушечных значений нет: чего нет в варианте, того нет и в ключе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandResult {
    RoyalFlush,
    StraightFlush { high: Rank },
    Quads { rank: Rank },
    FullHouse { set: Rank, pair: Rank },
    /// Пять старших карт масти флеша.
    Flush { ranks: [Rank; 5] },
    Straight { high: Rank },
    Set { rank: Rank, kickers: Kickers },
    TwoPair { high: Rank, low: Rank, kickers: Kickers },
    OnePair { rank: Rank, kickers: Kickers },
    /// Первый ранг — сама старшая карта, дальше кикеры.
    HighCard { ranks: Kickers },
}

impl HandResult {
    pub fn category(&self) -> HandCategory {
        match self {
            HandResult::RoyalFlush => HandCategory::RoyalFlush,
            HandResult::StraightFlush { .. } => HandCategory::StraightFlush,
            HandResult::Quads { .. } => HandCategory::Quads,
            HandResult::FullHouse { .. } => HandCategory::FullHouse,
            HandResult::Flush { .. } => HandCategory::Flush,
            HandResult::Straight { .. } => HandCategory::Straight,
            HandResult::Set { .. } => HandCategory::Set,
            HandResult::TwoPair { .. } => HandCategory::TwoPair,
            HandResult::OnePair { .. } => HandCategory::OnePair,
            HandResult::HighCard { .. } => HandCategory::HighCard,
        }
    }

    /// Упорядоченный ключ тай-брейка: (поле, ранг) по убыванию приоритета.
    /// У роял-флеша ключ пустой — любые два роял-флеша равны.
    pub fn tie_break_key(&self) -> Vec<(TieBreakField, Rank)> {
        let primary = TieBreakField::Primary(self.category());
        match self {
            HandResult::RoyalFlush => Vec::new(),
            HandResult::StraightFlush { high } | HandResult::Straight { high } => {
                vec![(primary, *high)]
            }
            HandResult::Quads { rank } => vec![(primary, *rank)],
            HandResult::FullHouse { set, pair } => {
                vec![(primary, *set), (TieBreakField::FullHousePair, *pair)]
            }
            HandResult::Flush { ranks } => with_fields(primary, ranks, &KICKER_FIELDS[1..]),
            HandResult::Set { rank, kickers } | HandResult::OnePair { rank, kickers } => {
                let mut key = vec![(primary, *rank)];
                key.extend(KICKER_FIELDS.iter().copied().zip(kickers.0.iter().copied()));
                key
            }
            HandResult::TwoPair { high, low, kickers } => {
                let mut key = vec![(primary, *high), (TieBreakField::LowPair, *low)];
                key.extend(KICKER_FIELDS.iter().copied().zip(kickers.0.iter().copied()));
                key
            }
            HandResult::HighCard { ranks } => with_fields(primary, &ranks.0, &KICKER_FIELDS[1..]),
        }
    }

    /// Значение конкретного поля, если оно есть в ключе.
    pub fn field(&self, field: TieBreakField) -> Option<Rank> {
        self.tie_break_key()
            .into_iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rank)| rank)
    }

    /// Главный ранг категории. `None` только у роял-флеша.
    pub fn primary_rank(&self) -> Option<Rank> {
        self.tie_break_key().first().map(|&(_, rank)| rank)
    }

    /// Второй ранг комбинации: пара фулл-хауса или младшая пара.
    pub fn secondary_rank(&self) -> Option<Rank> {
        match self {
            HandResult::FullHouse { pair, .. } => Some(*pair),
            HandResult::TwoPair { low, .. } => Some(*low),
            _ => None,
        }
    }

    /// Сравнение силы двух рук: категория, затем ключ тай-брейка слева направо.
    pub fn cmp_strength(&self, other: &HandResult) -> Ordering {
        self.category().cmp(&other.category()).then_with(|| {
            let a = self.tie_break_key();
            let b = other.tie_break_key();
            a.iter().map(|(_, r)| r).cmp(b.iter().map(|(_, r)| r))
        })
    }

    /// Короткое описание руки: "Pair of Jacks", "Full House, Kings full of 7s".
    pub fn describe(&self) -> String {
        match self {
            HandResult::RoyalFlush => "Royal Flush".to_string(),
            HandResult::StraightFlush { high } => format!("Straight Flush, {} high", high.face_name()),
            HandResult::Quads { rank } => format!("Quads, {}", plural(*rank)),
            HandResult::FullHouse { set, pair } => {
                format!("Full House, {} full of {}", plural(*set), plural(*pair))
            }
            HandResult::Flush { ranks } => format!("{}-high Flush", ranks[0].face_name()),
            HandResult::Straight { high } => format!("Straight, {} high", high.face_name()),
            HandResult::Set { rank, .. } => format!("Set of {}", plural(*rank)),
            HandResult::TwoPair { high, low, .. } => {
                format!("Two Pair {} and {}", plural(*high), plural(*low))
            }
            HandResult::OnePair { rank, .. } => format!("Pair of {}", plural(*rank)),
            HandResult::HighCard { ranks } => match ranks.0.first() {
                Some(top) => format!("{}-high", top.face_name()),
                None => "High Card".to_string(),
            },
        }
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_strength(other)
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// "Kings", "7s", "10s".
pub fn plural(rank: Rank) -> String {
    format!("{}s", rank.face_name())
}

fn with_fields(
    primary: TieBreakField,
    ranks: &[Rank],
    rest: &[TieBreakField],
) -> Vec<(TieBreakField, Rank)> {
    let mut fields = Vec::with_capacity(ranks.len());
    let mut ranks = ranks.iter().copied();
    if let Some(top) = ranks.next() {
        fields.push((primary, top));
    }
    fields.extend(rest.iter().copied().zip(ranks));
    fields
}
