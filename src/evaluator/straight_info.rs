use super::hand_analysis::rank_bit;
use crate::cards::Rank;

const WINDOW: u16 = 0b1_1111;

/// Whether a set of ranks contains a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect the highest straight in a rank bitmask (bit = rank value).
    /// The wheel (A-2-3-4-5) is checked separately and tops out at Five.
    pub fn detect(rank_mask: u16) -> Self {
        let top_rank = (6..=14u8)
            .rev()
            .find(|&top| {
                let window = WINDOW << (top - 4);
                rank_mask & window == window
            })
            .and_then(Rank::from_value)
            .or_else(|| Self::is_wheel(rank_mask).then_some(Rank::Five));

        StraightInfo { top_rank }
    }

    fn is_wheel(rank_mask: u16) -> bool {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
            .into_iter()
            .all(|r| rank_mask & rank_bit(r) != 0)
    }
}
