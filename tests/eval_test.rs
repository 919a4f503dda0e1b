//! Тесты классификатора рук (crate::eval).
//!
//! Проверяем:
//! - каждую из десяти категорий;
//! - стриты с тузом снизу (wheel) и стрит-флеш внутри 6-карточного флеша;
//! - выбор пар при трёх парах и двух сетах;
//! - набор кикеров и порядок полей ключа тай-брейка;
//! - независимость от порядка карт и ошибки контракта.

use holdem_showdown::domain::card::{Card, Rank, Suit};
use holdem_showdown::engine::EngineError;
use holdem_showdown::eval::{
    classify, classify_cards, HandCategory, HandResult, Kickers, TieBreakField,
};

use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn k(ranks: &[Rank]) -> Kickers {
    Kickers(ranks.to_vec())
}

//
// ============= Стриты ============
//
#[test]
fn ace_low_straight_plays_five_high() {
    let hole = [c(Ace, Spades), c(Two, Diamonds)];
    let board = [
        c(Three, Clubs),
        c(Four, Hearts),
        c(Five, Spades),
        c(Nine, Diamonds),
        c(King, Clubs),
    ];

    let hand = classify(hole, board).unwrap();

    assert_eq!(hand, HandResult::Straight { high: Five });
    assert_eq!(hand.primary_rank(), Some(Five));
}

#[test]
fn broadway_of_mixed_suits_is_a_plain_straight() {
    let hole = [c(Ace, Clubs), c(King, Diamonds)];
    let board = [
        c(Queen, Hearts),
        c(Jack, Spades),
        c(Ten, Clubs),
        c(Two, Diamonds),
        c(Three, Hearts),
    ];

    assert_eq!(classify(hole, board).unwrap(), HandResult::Straight { high: Ace });
}

#[test]
fn highest_window_is_taken_from_six_in_a_row() {
    // 4-5-6-7-8-9 → стрит до девятки.
    let hole = [c(Four, Clubs), c(Nine, Diamonds)];
    let board = [
        c(Five, Hearts),
        c(Six, Spades),
        c(Seven, Clubs),
        c(Eight, Diamonds),
        c(King, Hearts),
    ];

    assert_eq!(classify(hole, board).unwrap(), HandResult::Straight { high: Nine });
}

//
// ============= Флеши и стрит-флеши ============
//
#[test]
fn royal_flush_has_no_tie_break_fields() {
    let hole = [c(Two, Clubs), c(Three, Diamonds)];
    let board = [
        c(Ace, Hearts),
        c(King, Hearts),
        c(Queen, Hearts),
        c(Jack, Hearts),
        c(Ten, Hearts),
    ];

    let hand = classify(hole, board).unwrap();

    assert_eq!(hand, HandResult::RoyalFlush);
    assert_eq!(hand.category(), HandCategory::RoyalFlush);
    assert!(hand.tie_break_key().is_empty());
    assert_eq!(hand.primary_rank(), None);
}

#[test]
fn straight_flush_reports_top_card() {
    let hole = [c(Eight, Clubs), c(Three, Diamonds)];
    let board = [
        c(Nine, Clubs),
        c(Ten, Clubs),
        c(Jack, Clubs),
        c(Queen, Clubs),
        c(Two, Diamonds),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::StraightFlush { high: Queen }
    );
}

#[test]
fn straight_flush_inside_a_six_card_flush() {
    // Черви: 5 6 7 8 9 K. Старшие пять червей (K 9 8 7 6) не стрит,
    // но 5-9 червей — стрит-флеш.
    let hole = [c(Five, Hearts), c(King, Hearts)];
    let board = [
        c(Six, Hearts),
        c(Seven, Hearts),
        c(Eight, Hearts),
        c(Nine, Hearts),
        c(Two, Clubs),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::StraightFlush { high: Nine }
    );
}

#[test]
fn suited_wheel_is_a_five_high_straight_flush() {
    let hole = [c(Ace, Hearts), c(Two, Hearts)];
    let board = [
        c(Three, Hearts),
        c(Four, Hearts),
        c(Five, Hearts),
        c(King, Clubs),
        c(Queen, Diamonds),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::StraightFlush { high: Five }
    );
}

#[test]
fn flush_beats_straight_from_the_same_cards() {
    // Трефы: A 7 6 4 2; стрит 3-7 из разных мастей.
    let hole = [c(Ace, Clubs), c(Seven, Clubs)];
    let board = [
        c(Two, Clubs),
        c(Four, Clubs),
        c(Six, Clubs),
        c(Five, Diamonds),
        c(Three, Hearts),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::Flush {
            ranks: [Ace, Seven, Six, Four, Two]
        }
    );
}

#[test]
fn seven_card_flush_keeps_top_five() {
    let hole = [c(Ace, Hearts), c(Queen, Hearts)];
    let board = [
        c(Two, Hearts),
        c(Four, Hearts),
        c(Six, Hearts),
        c(Eight, Hearts),
        c(Ten, Hearts),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(
        hand,
        HandResult::Flush {
            ranks: [Ace, Queen, Ten, Eight, Six]
        }
    );
    assert_eq!(
        hand.tie_break_key(),
        vec![
            (TieBreakField::Primary(HandCategory::Flush), Ace),
            (TieBreakField::SecondKicker, Queen),
            (TieBreakField::ThirdKicker, Ten),
            (TieBreakField::FourthKicker, Eight),
            (TieBreakField::FifthKicker, Six),
        ]
    );
}

//
// ============= Каре и фулл-хаусы ============
//
#[test]
fn quads_only_keep_quad_rank() {
    let hole = [c(King, Diamonds), c(King, Hearts)];
    let board = [
        c(King, Clubs),
        c(King, Spades),
        c(Three, Clubs),
        c(Three, Diamonds),
        c(Seven, Spades),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(hand, HandResult::Quads { rank: King });
    assert_eq!(hand.tie_break_key().len(), 1);
}

#[test]
fn two_sets_make_a_full_house() {
    let hole = [c(Queen, Clubs), c(Queen, Hearts)];
    let board = [
        c(Queen, Spades),
        c(Six, Clubs),
        c(Six, Spades),
        c(Six, Diamonds),
        c(Ace, Clubs),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::FullHouse {
            set: Queen,
            pair: Six
        }
    );
}

#[test]
fn full_house_takes_the_higher_of_two_pairs() {
    let hole = [c(Nine, Clubs), c(Nine, Diamonds)];
    let board = [
        c(Nine, Hearts),
        c(King, Clubs),
        c(King, Diamonds),
        c(Four, Spades),
        c(Four, Hearts),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(
        hand,
        HandResult::FullHouse {
            set: Nine,
            pair: King
        }
    );
    assert_eq!(hand.secondary_rank(), Some(King));
}

//
// ============= Сет, две пары, пара, старшая карта ============
//
#[test]
fn set_keeps_two_kickers() {
    let hole = [c(Seven, Clubs), c(Seven, Diamonds)];
    let board = [
        c(Seven, Hearts),
        c(King, Spades),
        c(Two, Diamonds),
        c(Nine, Clubs),
        c(Four, Hearts),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::Set {
            rank: Seven,
            kickers: k(&[King, Nine])
        }
    );
}

#[test]
fn three_pairs_keep_the_top_two_and_unpaired_third_is_a_kicker() {
    let hole = [c(King, Clubs), c(King, Hearts)];
    let board = [
        c(Nine, Clubs),
        c(Nine, Spades),
        c(Four, Diamonds),
        c(Four, Hearts),
        c(Two, Clubs),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(
        hand,
        HandResult::TwoPair {
            high: King,
            low: Nine,
            kickers: k(&[Four])
        }
    );
    assert_eq!(hand.field(TieBreakField::LowPair), Some(Nine));
    assert_eq!(hand.field(TieBreakField::HighCard), Some(Four));
}

#[test]
fn three_pairs_with_an_ace_use_the_ace_as_kicker() {
    let hole = [c(King, Clubs), c(King, Hearts)];
    let board = [
        c(Nine, Clubs),
        c(Nine, Spades),
        c(Four, Diamonds),
        c(Four, Hearts),
        c(Ace, Clubs),
    ];

    assert_eq!(
        classify(hole, board).unwrap(),
        HandResult::TwoPair {
            high: King,
            low: Nine,
            kickers: k(&[Ace])
        }
    );
}

#[test]
fn one_pair_has_three_kickers_in_order() {
    let hole = [c(Jack, Clubs), c(Jack, Diamonds)];
    let board = [
        c(Ace, Spades),
        c(Eight, Hearts),
        c(Six, Clubs),
        c(Three, Diamonds),
        c(Two, Spades),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(
        hand.tie_break_key(),
        vec![
            (TieBreakField::Primary(HandCategory::OnePair), Jack),
            (TieBreakField::HighCard, Ace),
            (TieBreakField::SecondKicker, Eight),
            (TieBreakField::ThirdKicker, Six),
        ]
    );
    assert_eq!(hand.describe(), "Pair of Jacks");
}

#[test]
fn high_card_keeps_five_ranks() {
    let hole = [c(King, Clubs), c(Jack, Diamonds)];
    let board = [
        c(Nine, Hearts),
        c(Seven, Spades),
        c(Five, Clubs),
        c(Three, Diamonds),
        c(Two, Hearts),
    ];

    let hand = classify(hole, board).unwrap();
    assert_eq!(
        hand,
        HandResult::HighCard {
            ranks: k(&[King, Jack, Nine, Seven, Five])
        }
    );
    assert_eq!(hand.tie_break_key().len(), 5);
    assert_eq!(hand.describe(), "King-high");
}

//
// ============= Свойства ============
//
#[test]
fn classification_ignores_card_order_and_is_idempotent() {
    let seven = [
        c(Jack, Clubs),
        c(Jack, Diamonds),
        c(Ace, Spades),
        c(Eight, Hearts),
        c(Six, Clubs),
        c(Three, Diamonds),
        c(Two, Spades),
    ];

    let first = classify([seven[0], seven[1]], [seven[2], seven[3], seven[4], seven[5], seven[6]])
        .unwrap();
    assert_eq!(
        classify([seven[0], seven[1]], [seven[2], seven[3], seven[4], seven[5], seven[6]]).unwrap(),
        first
    );

    // Все сдвиги: каждая карта хотя бы раз побывает карманной.
    for shift in 1..7 {
        let mut cards = seven;
        cards.rotate_left(shift);
        let again = classify(
            [cards[0], cards[1]],
            [cards[2], cards[3], cards[4], cards[5], cards[6]],
        )
        .unwrap();
        assert_eq!(again, first, "сдвиг {shift} изменил результат");
    }
}

#[test]
fn category_order_is_total_and_strict() {
    for pair in HandCategory::ALL_DESC.windows(2) {
        assert!(pair[0] > pair[1], "{} должна быть сильнее {}", pair[0], pair[1]);
    }
    for cat in HandCategory::ALL_DESC {
        assert!(HandCategory::RoyalFlush >= cat);
        assert!(HandCategory::HighCard <= cat);
    }
}

#[test]
fn strength_ordering_follows_category_then_key() {
    let pair_of_aces = HandResult::OnePair {
        rank: Ace,
        kickers: k(&[King, Queen, Jack]),
    };
    let pair_of_aces_worse = HandResult::OnePair {
        rank: Ace,
        kickers: k(&[King, Queen, Ten]),
    };
    let two_pair = HandResult::TwoPair {
        high: Three,
        low: Two,
        kickers: k(&[Four]),
    };

    assert!(two_pair > pair_of_aces);
    assert!(pair_of_aces > pair_of_aces_worse);
    assert_eq!(HandResult::RoyalFlush.cmp(&HandResult::RoyalFlush), std::cmp::Ordering::Equal);
}

//
// ============= Ошибки контракта ============
//
#[test]
fn duplicate_card_is_rejected() {
    let hole = [c(Ace, Spades), c(King, Spades)];
    let board = [
        c(Ace, Spades),
        c(Four, Hearts),
        c(Five, Spades),
        c(Nine, Diamonds),
        c(Two, Clubs),
    ];

    assert_eq!(
        classify(hole, board),
        Err(EngineError::DuplicateCard(c(Ace, Spades)))
    );
}

#[test]
fn wrong_card_counts_are_rejected() {
    let hole = vec![c(Ace, Spades)];
    let board = vec![
        c(Three, Clubs),
        c(Four, Hearts),
        c(Five, Spades),
        c(Nine, Diamonds),
        c(King, Clubs),
    ];

    assert_eq!(
        classify_cards(&hole, &board),
        Err(EngineError::WrongCardCount {
            what: "hole",
            expected: 2,
            actual: 1
        })
    );

    let hole = vec![c(Ace, Spades), c(Two, Diamonds)];
    assert!(matches!(
        classify_cards(&hole, &board[..4]),
        Err(EngineError::WrongCardCount { what: "board", .. })
    ));
    assert_eq!(
        classify_cards(&hole, &board).unwrap(),
        HandResult::Straight { high: Five }
    );
}
