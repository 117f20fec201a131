//! Ordering of evaluated hands and showdown outcomes.

use crate::cards::{Card, Rank};
use crate::evaluator::{evaluate_holdem, evaluate_seven, EvalError, Evaluation};
use crate::hand::{Board, HandError, HoleCards};
use core::cmp::Ordering;

/// Result of a showdown for the first hand against the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The same showdown seen from the other seat.
    pub const fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Ranks compared position by position once categories are equal.
struct TieBreak {
    ranks: [Rank; 5],
    len: usize,
}

impl TieBreak {
    fn new(named: &[Rank]) -> Self {
        let mut ranks = [Rank::Two; 5];
        ranks[..named.len()].copy_from_slice(named);
        Self { ranks, len: named.len() }
    }

    fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len]
    }
}

fn tie_break(eval: &Evaluation) -> TieBreak {
    match *eval {
        Evaluation::HighCard(ranks) | Evaluation::Flush(ranks) => TieBreak::new(&ranks),
        Evaluation::Pair { pair, kickers: [k0, k1, k2] } => TieBreak::new(&[pair, k0, k1, k2]),
        Evaluation::TwoPair { high, low, kicker } => TieBreak::new(&[high, low, kicker]),
        Evaluation::Trips { trips, kickers: [k0, k1] } => TieBreak::new(&[trips, k0, k1]),
        Evaluation::Straight { top } | Evaluation::StraightFlush { top } => TieBreak::new(&[top]),
        Evaluation::FullHouse { trips, pair } => TieBreak::new(&[trips, pair]),
        Evaluation::Quads { quads, kicker } => TieBreak::new(&[quads, kicker]),
        Evaluation::RoyalFlush => TieBreak::new(&[]),
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| tie_break(self).as_slice().cmp(tie_break(other).as_slice()))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two evaluated hands: category first, then the category's tie-break ranks.
///
/// ```
/// use poker_equity::cards::Rank;
/// use poker_equity::comparator::{compare, Outcome};
/// use poker_equity::evaluator::Evaluation;
///
/// let sixes_full = Evaluation::FullHouse { trips: Rank::Six, pair: Rank::Five };
/// let fives_full = Evaluation::FullHouse { trips: Rank::Five, pair: Rank::Six };
/// assert_eq!(compare(&sixes_full, &fives_full), Outcome::Win);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Outcome {
    Outcome::from_ordering(a.cmp(b))
}

/// Evaluate and compare two seven-card hands. Each hand must hold distinct cards.
pub fn compare_seven(a: &[Card; 7], b: &[Card; 7]) -> Outcome {
    compare(&evaluate_seven(a), &evaluate_seven(b))
}

/// Compare two Hold'em hands on a shared, complete board.
///
/// ```
/// use poker_equity::comparator::{compare_holdem, Outcome};
/// use poker_equity::hand::{Board, HoleCards};
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let aces: HoleCards = "As Ah".parse().unwrap();
/// let kings: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&aces, &kings, &board).unwrap(), Outcome::Win);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Outcome, EvalError> {
    if let Some(card) = a.as_array().into_iter().find(|&c| b.contains(c)) {
        return Err(HandError::DuplicateCard(card).into());
    }
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(compare(&va, &vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate;

    fn eval(codes: &str) -> Evaluation {
        evaluate(&parse_cards(codes).unwrap()).unwrap()
    }

    #[test]
    fn higher_category_wins_outright() {
        let flush = eval("2h 4h 6h 8h Th Kc Qd");
        let straight = eval("9c Td Jh Qs Kc 2d 3d");
        assert_eq!(compare(&flush, &straight), Outcome::Win);
        assert_eq!(compare(&straight, &flush), Outcome::Loss);
    }

    #[test]
    fn full_house_compares_trips_before_pair() {
        let sixes = eval("5s 5h 6d 6c 6s 2h 3c");
        let fives = eval("5s 5h 5d 6c 6s 2h 3c");
        assert_eq!(compare(&sixes, &fives), Outcome::Win);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = eval("Ac 2d 3h 4s 5c Jd Qd");
        let six = eval("2d 3h 4s 5c 6d Jd Qc");
        assert_eq!(compare(&wheel, &six), Outcome::Loss);
    }

    #[test]
    fn pair_kickers_decide_in_order() {
        let a = eval("Kc Kd Ah 9s 7d 4c 2h");
        let b = eval("Kc Kd Ah 9s 6d 4c 2h");
        assert_eq!(compare(&a, &b), Outcome::Win);
    }

    #[test]
    fn kickers_beyond_fifth_card_do_not_play() {
        // Both play A-K-Q-J-9; the sixth and seventh cards differ.
        let a = eval("Ac Kd Qh Js 9c 4d 3h");
        let b = eval("Ac Kd Qh Js 9c 5d 2h");
        assert_eq!(compare(&a, &b), Outcome::Tie);
    }

    #[test]
    fn flush_compares_flush_cards_only() {
        let a = eval("Ah 9h 7h 4h 2h Kc Qd");
        let b = eval("Ah 9h 7h 3h 2h Kc Qd");
        assert_eq!(compare(&a, &b), Outcome::Win);
    }

    #[test]
    fn royal_flushes_tie() {
        assert_eq!(compare(&Evaluation::RoyalFlush, &Evaluation::RoyalFlush), Outcome::Tie);
    }

    #[test]
    fn reverse_is_an_involution() {
        for o in [Outcome::Win, Outcome::Loss, Outcome::Tie] {
            assert_eq!(o.reverse().reverse(), o);
        }
    }

    #[test]
    fn holdem_rejects_shared_hole_card() {
        let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
        let a: HoleCards = "As Ah".parse().unwrap();
        let b: HoleCards = "As Kh".parse().unwrap();
        assert!(matches!(compare_holdem(&a, &b, &board), Err(EvalError::InvalidHand(_))));
    }
}
