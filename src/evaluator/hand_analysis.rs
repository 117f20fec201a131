use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Bit for `rank` in a rank bitmask (bit index = rank value, 2..=14).
pub const fn rank_bit(rank: Rank) -> u16 {
    1 << rank.value()
}

/// The `N` highest ranks set in `mask`, descending. Pads with Two when the
/// mask holds fewer than `N` ranks.
pub fn highest_ranks<const N: usize>(mask: u16) -> [Rank; N] {
    let mut out = [Rank::Two; N];
    let present = Rank::ALL.iter().rev().filter(|&&r| mask & rank_bit(r) != 0);
    for (slot, rank) in out.iter_mut().zip(present) {
        *slot = *rank;
    }
    out
}

/// Pre-computed analysis of 5 to 7 cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Distinct ranks present.
    pub rank_mask: u16,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
    /// Straight made only of flush-suit cards.
    pub straight_flush_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut rank_mask = 0u16;
        for card in cards {
            rank_counts[card.rank().value() as usize] += 1;
            rank_mask |= rank_bit(card.rank());
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(rank_mask);
        let straight_flush_info = StraightInfo::detect(suit_info.flush_mask);

        Self { rank_mask, rank_groups, suit_info, straight_info, straight_flush_info }
    }

    /// Highest ranks outside the named groups, filling the slots they leave open.
    pub fn kickers<const N: usize>(&self, excluded: &[Rank]) -> [Rank; N] {
        let mask = excluded.iter().fold(self.rank_mask, |m, &r| m & !rank_bit(r));
        highest_ranks(mask)
    }

    pub fn top_five(&self) -> [Rank; 5] {
        highest_ranks(self.rank_mask)
    }

    pub fn flush_top_five(&self) -> [Rank; 5] {
        highest_ranks(self.suit_info.flush_mask)
    }
}
