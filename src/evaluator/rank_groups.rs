use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKKQ7 groups as [(Ace, 3), (King, 2), (Queen, 1), (Seven, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// The highest four-of-a-kind rank, if any.
    pub fn quads(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// The highest three-of-a-kind rank, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Trips rank and pair rank of the best full house. A second set of trips
    /// counts as the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        match self.groups.as_slice() {
            [(trips, 3), (pair, 2..=3), ..] => Some((*trips, *pair)),
            _ => None,
        }
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> impl Iterator<Item = Rank> + '_ {
        self.with_count(2)
    }

    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(rank, _)| *rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn test_quad() {
        let counts = make_counts(&[(14, 4), (13, 3)]); // AAAAKKK
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.quads(), Some(Rank::Ace));
        assert_eq!(groups.trips(), Some(Rank::King));
    }

    #[test]
    fn test_full_house_from_two_trips() {
        let counts = make_counts(&[(5, 3), (6, 3), (2, 1)]); // 666 555 2
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.full_house(), Some((Rank::Six, Rank::Five)));
    }

    #[test]
    fn test_full_house_prefers_higher_pair() {
        let counts = make_counts(&[(9, 3), (4, 2), (12, 2)]); // 999 QQ 44
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.full_house(), Some((Rank::Nine, Rank::Queen)));
    }

    #[test]
    fn test_trips_alone_is_not_full_house() {
        let counts = make_counts(&[(10, 3), (5, 1), (3, 1), (8, 1), (13, 1)]);
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.trips(), Some(Rank::Ten));
        assert_eq!(groups.full_house(), None);
    }

    #[test]
    fn test_three_pairs_sorted() {
        let counts = make_counts(&[(3, 2), (14, 2), (9, 2), (7, 1)]);
        let groups = RankGroups::from_counts(&counts);
        let pairs: Vec<Rank> = groups.pairs().collect();
        assert_eq!(pairs, vec![Rank::Ace, Rank::Nine, Rank::Three]);
    }

    #[test]
    fn test_sorting() {
        let counts = make_counts(&[(5, 1), (14, 1), (10, 2)]);
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.groups, [(Rank::Ten, 2), (Rank::Ace, 1), (Rank::Five, 1)]);
    }
}
