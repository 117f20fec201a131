use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Evaluation;

/// Strategy pattern: each detector recognizes one category and builds its
/// tie-break payload, or declines.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten to Ace, all the same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_flush_info.top_rank?;
        (top == Rank::Ace).then_some(Evaluation::RoyalFlush)
    }
}

/// Straight Flush: five consecutive ranks within the flush suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_flush_info.top_rank?;
        Some(Evaluation::StraightFlush { top })
    }
}

pub struct QuadsDetector;

impl CategoryDetector for QuadsDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let quads = analysis.rank_groups.quads()?;
        let [kicker] = analysis.kickers::<1>(&[quads]);
        Some(Evaluation::Quads { quads, kicker })
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        Some(Evaluation::FullHouse { trips, pair })
    }
}

/// Flush: the five highest cards of the flush suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.suit_info.is_flush().then(|| Evaluation::Flush(analysis.flush_top_five()))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_info.top_rank?;
        Some(Evaluation::Straight { top })
    }
}

pub struct TripsDetector;

impl CategoryDetector for TripsDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        Some(Evaluation::Trips { trips, kickers: analysis.kickers(&[trips]) })
    }
}

/// Two Pair: the two highest pairs; a third pair can still play as the kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let mut pairs = analysis.rank_groups.pairs();
        let (high, low) = (pairs.next()?, pairs.next()?);
        let [kicker] = analysis.kickers::<1>(&[high, low]);
        Some(Evaluation::TwoPair { high, low, kicker })
    }
}

pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pair = analysis.rank_groups.pairs().next()?;
        Some(Evaluation::Pair { pair, kickers: analysis.kickers(&[pair]) })
    }
}

/// High Card: no matching ranks or sequences
pub struct HighCardDetector;

impl HighCardDetector {
    pub fn build(&self, analysis: &HandAnalysis) -> Evaluation {
        Evaluation::HighCard(analysis.top_five())
    }
}

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        Some(self.build(analysis))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &QuadsDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &TripsDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
