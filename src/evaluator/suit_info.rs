use super::hand_analysis::rank_bit;
use crate::cards::{Card, Suit};

/// Flush information for up to seven cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// Ranks held in the flush suit, as a bitmask indexed by rank value.
    pub flush_mask: u16,
}

impl SuitInfo {
    /// A flush is any suit holding five or more of the cards.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        let mut masks = [0u16; 4];
        for card in cards {
            let i = card.suit().index();
            counts[i] += 1;
            masks[i] |= rank_bit(card.rank());
        }

        Suit::ALL
            .into_iter()
            .find(|s| counts[s.index()] >= 5)
            .map(|s| SuitInfo { flush_suit: Some(s), flush_mask: masks[s.index()] })
            .unwrap_or(SuitInfo { flush_suit: None, flush_mask: 0 })
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
