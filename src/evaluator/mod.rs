pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Board, HandError, HoleCards};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    Trips = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    Quads = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Priority on the 1 (High Card) ..= 10 (Royal Flush) scale.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::Trips => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of a hand: its category plus the ranks that break ties inside it.
///
/// Ordering lives in [`crate::comparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    HighCard([Rank; 5]),
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    Trips { trips: Rank, kickers: [Rank; 2] },
    /// `top` is Five for the wheel.
    Straight { top: Rank },
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    Quads { quads: Rank, kicker: Rank },
    StraightFlush { top: Rank },
    RoyalFlush,
}

impl Evaluation {
    pub const fn category(&self) -> Category {
        match self {
            Evaluation::HighCard(_) => Category::HighCard,
            Evaluation::Pair { .. } => Category::Pair,
            Evaluation::TwoPair { .. } => Category::TwoPair,
            Evaluation::Trips { .. } => Category::Trips,
            Evaluation::Straight { .. } => Category::Straight,
            Evaluation::Flush(_) => Category::Flush,
            Evaluation::FullHouse { .. } => Category::FullHouse,
            Evaluation::Quads { .. } => Category::Quads,
            Evaluation::StraightFlush { .. } => Category::StraightFlush,
            Evaluation::RoyalFlush => Category::RoyalFlush,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("expected 5 to 7 cards, got {0}")]
    CardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("not enough cards to evaluate")]
    NotEnoughCards,
}

/// Evaluate 5, 6 or 7 distinct cards.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// assert_eq!(evaluate(&cards).unwrap().category(), Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }
    Ok(evaluate_unchecked(cards))
}

/// Evaluate exactly five cards. Inputs must be distinct.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    evaluate_unchecked(cards)
}

/// Evaluate two hole cards plus a five-card board. Inputs must be distinct;
/// this is the simulator's hot path and skips validation.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    evaluate_unchecked(cards)
}

/// Evaluate a Hold'em hand given hole cards and a complete board.
///
/// ```
/// use poker_equity::evaluator::{evaluate_holdem, Category};
/// use poker_equity::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category(), Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    let [b0, b1, b2, b3, b4] = board.as_slice() else {
        return Err(EvalError::NotEnoughCards);
    };
    if let Some(&card) = board.as_slice().iter().find(|&&c| hole.contains(c)) {
        return Err(HandError::DuplicateCard(card).into());
    }
    Ok(evaluate_seven(&[hole.first(), hole.second(), *b0, *b1, *b2, *b3, *b4]))
}

fn evaluate_unchecked(cards: &[Card]) -> Evaluation {
    use detector::{CategoryDetector, HighCardDetector, DETECTORS};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Highest category first; the high-card detector always matches.
    DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| HighCardDetector.build(&analysis))
}
