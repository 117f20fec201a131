//! Monte Carlo equity of one Hold'em hand against another.
//!
//! Every trial copies the baseline deck, completes the known board to five
//! cards with uniform draws, evaluates both seven-card hands and records a
//! win, loss or tie for the hero. Ties are their own outcome and are never
//! split between the players.

use crate::cards::{Card, Rank, Suit};
use crate::comparator::{compare_seven, Outcome};
use crate::config::{ConfigError, SimulationConfig};
use crate::deck::{Deck, DeckError};
use crate::hand::{Board, HandError, HoleCards, Matchup};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::ops::{Add, AddAssign};
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Outcome counts from the hero's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    /// Reduce the counts to probabilities. An empty tally yields all zeros.
    pub fn equity(&self) -> Equity {
        let total = self.total();
        if total == 0 {
            return Equity { hero_win: 0.0, villain_win: 0.0, tie: 0.0 };
        }
        let total = total as f64;
        Equity {
            hero_win: self.wins as f64 / total,
            villain_win: self.losses as f64 / total,
            tie: self.ties as f64 / total,
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
            ties: self.ties + rhs.ties,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

/// Hero win, villain win and tie probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    pub hero_win: f64,
    pub villain_win: f64,
    pub tie: f64,
}

impl Equity {
    pub fn as_array(&self) -> [f64; 3] {
        [self.hero_win, self.villain_win, self.tie]
    }

    /// The same result from the villain's seat.
    pub fn swapped(&self) -> Equity {
        Equity { hero_win: self.villain_win, villain_win: self.hero_win, tie: self.tie }
    }
}

/// A validated matchup and the deck left once its cards are dealt.
#[derive(Debug, Clone)]
pub struct Simulator {
    matchup: Matchup,
    deck: Deck,
}

impl Simulator {
    pub fn new(matchup: Matchup) -> Result<Self, EquityError> {
        let deck = Deck::without(&matchup.known_cards())?;
        Ok(Self { matchup, deck })
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    /// Baseline deck every trial starts from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Complete the known board once.
    pub fn sample_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<[Card; 5], EquityError> {
        let mut scratch = self.deck.clone();
        self.complete_board(&mut scratch, rng)
    }

    /// Play out a single trial.
    pub fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome, EquityError> {
        let mut scratch = self.deck.clone();
        self.trial_with(&mut scratch, rng)
    }

    /// Run `trials` trials sequentially on one generator.
    pub fn tally<R: Rng + ?Sized>(&self, trials: u32, rng: &mut R) -> Result<Tally, EquityError> {
        if trials == 0 {
            return Err(ConfigError::NoTrials.into());
        }
        let mut scratch = self.deck.clone();
        let mut tally = Tally::default();
        for _ in 0..trials {
            tally.record(self.trial_with(&mut scratch, rng)?);
        }
        Ok(tally)
    }

    /// Sequential equity over `trials` trials.
    pub fn run<R: Rng + ?Sized>(&self, trials: u32, rng: &mut R) -> Result<Equity, EquityError> {
        Ok(self.tally(trials, rng)?.equity())
    }

    /// Split the trials over up to `shards` rayon tasks. Each shard draws from
    /// its own ChaCha stream of `seed`, so a `(seed, shards)` pair always
    /// gives the same tally.
    pub fn tally_parallel(
        &self,
        trials: u32,
        seed: u64,
        shards: usize,
    ) -> Result<Tally, EquityError> {
        if trials == 0 {
            return Err(ConfigError::NoTrials.into());
        }
        if shards == 0 {
            return Err(ConfigError::NoThreads.into());
        }
        let shards = shards.min(trials as usize);
        let per_shard = trials / shards as u32;
        let remainder = trials as usize % shards;

        let tallies = (0..shards)
            .into_par_iter()
            .map(|shard| -> Result<Tally, EquityError> {
                let n = per_shard + u32::from(shard < remainder);
                let mut rng = shard_rng(seed, shard);
                let tally = self.tally(n, &mut rng)?;
                trace!(shard, trials = n, ?tally, "shard done");
                Ok(tally)
            })
            .collect::<Result<Vec<Tally>, EquityError>>()?;

        Ok(tallies.into_iter().fold(Tally::default(), Add::add))
    }

    pub fn run_parallel(
        &self,
        trials: u32,
        seed: u64,
        shards: usize,
    ) -> Result<Equity, EquityError> {
        Ok(self.tally_parallel(trials, seed, shards)?.equity())
    }

    /// Run as configured. Without a configured seed one is drawn from the
    /// thread RNG and logged, so the run can be repeated.
    pub fn run_with(&self, config: &SimulationConfig) -> Result<Equity, EquityError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(
            trials = config.trials,
            threads = config.threads,
            seed,
            "starting equity simulation"
        );

        let tally = if config.threads == 1 {
            self.tally(config.trials, &mut ChaCha8Rng::seed_from_u64(seed))?
        } else {
            self.tally_parallel(config.trials, seed, config.threads)?
        };

        debug!(?tally, "equity simulation finished");
        Ok(tally.equity())
    }

    fn complete_board<R: Rng + ?Sized>(
        &self,
        scratch: &mut Deck,
        rng: &mut R,
    ) -> Result<[Card; 5], EquityError> {
        let known = self.matchup.board().as_slice();
        // Slots past the known cards are overwritten by draws.
        let mut board = [Card::new(Rank::Two, Suit::Clubs); 5];
        board[..known.len()].copy_from_slice(known);
        for slot in &mut board[known.len()..] {
            *slot = scratch.draw_random(rng).ok_or(DeckError::Exhausted)?;
        }
        Ok(board)
    }

    fn trial_with<R: Rng + ?Sized>(
        &self,
        scratch: &mut Deck,
        rng: &mut R,
    ) -> Result<Outcome, EquityError> {
        scratch.clone_from(&self.deck);
        let [b0, b1, b2, b3, b4] = self.complete_board(scratch, rng)?;
        let (hero, villain) = (self.matchup.hero(), self.matchup.villain());
        let hero_seven = [hero.first(), hero.second(), b0, b1, b2, b3, b4];
        let villain_seven = [villain.first(), villain.second(), b0, b1, b2, b3, b4];
        Ok(compare_seven(&hero_seven, &villain_seven))
    }
}

fn shard_rng(seed: u64, shard: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(shard as u64);
    rng
}

/// Estimate the equity of `hero` against `villain` over `trials` random
/// board completions.
///
/// ```
/// use poker_equity::equity::equity;
/// use poker_equity::hand::{Board, HoleCards};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hero: HoleCards = "AsAh".parse().unwrap();
/// let villain: HoleCards = "KsKh".parse().unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let eq = equity(&hero, &villain, &Board::empty(), 2_000, &mut rng).unwrap();
/// assert!(eq.hero_win > eq.villain_win);
/// ```
pub fn equity<R: Rng + ?Sized>(
    hero: &HoleCards,
    villain: &HoleCards,
    board: &Board,
    trials: u32,
    rng: &mut R,
) -> Result<Equity, EquityError> {
    let matchup = Matchup::try_new(*hero, *villain, board.clone())?;
    Simulator::new(matchup)?.run(trials, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(hero: &str, villain: &str, board: &str) -> Simulator {
        Simulator::new(Matchup::parse(hero, villain, board).unwrap()).unwrap()
    }

    #[test]
    fn tally_counts_every_trial() {
        let sim = simulator("AhKh", "QsQd", "");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let tally = sim.tally(1_000, &mut rng).unwrap();
        assert_eq!(tally.total(), 1_000);
    }

    #[test]
    fn zero_trials_rejected() {
        let sim = simulator("AhKh", "QsQd", "");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(sim.run(0, &mut rng), Err(EquityError::Config(ConfigError::NoTrials)));
        assert_eq!(
            sim.run_parallel(0, 5, 4),
            Err(EquityError::Config(ConfigError::NoTrials))
        );
        assert_eq!(
            sim.run_parallel(10, 5, 0),
            Err(EquityError::Config(ConfigError::NoThreads))
        );
    }

    #[test]
    fn sampled_boards_keep_known_cards_and_avoid_dealt_ones() {
        let sim = simulator("AhKh", "QsQd", "2c7d9s");
        let known = sim.matchup().known_cards();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            let board = sim.sample_board(&mut rng).unwrap();
            assert_eq!(&board[..3], sim.matchup().board().as_slice());
            for (i, card) in board[3..].iter().enumerate() {
                assert!(!known.contains(card), "drew known card {card}");
                assert!(!board[3 + i + 1..].contains(card));
            }
        }
        assert_eq!(sim.deck().len(), 45);
    }

    #[test]
    fn parallel_shards_cover_all_trials() {
        let sim = simulator("AhKh", "QsQd", "");
        let tally = sim.tally_parallel(1_001, 17, 4).unwrap();
        assert_eq!(tally.total(), 1_001);
        // More shards than trials collapses to one trial per shard.
        let tally = sim.tally_parallel(3, 17, 8).unwrap();
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn parallel_run_is_reproducible() {
        let sim = simulator("7c7d", "AsKd", "");
        let a = sim.tally_parallel(2_000, 99, 4).unwrap();
        let b = sim.tally_parallel(2_000, 99, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn configured_seed_is_reproducible() {
        let sim = simulator("7c7d", "AsKd", "");
        let config = SimulationConfig::default().with_trials(1_500).with_seed(3);
        assert_eq!(sim.run_with(&config).unwrap(), sim.run_with(&config).unwrap());
        let threaded = config.with_threads(3);
        assert_eq!(sim.run_with(&threaded).unwrap(), sim.run_with(&threaded).unwrap());
    }

    #[test]
    fn tally_equity_and_merge() {
        let mut t = Tally::default();
        t.record(Outcome::Win);
        t.record(Outcome::Win);
        t.record(Outcome::Loss);
        t.record(Outcome::Tie);
        let eq = t.equity();
        assert_eq!(eq.as_array(), [0.5, 0.25, 0.25]);
        assert_eq!(eq.swapped().as_array(), [0.25, 0.5, 0.25]);

        let mut merged = t;
        merged += Tally { wins: 0, losses: 3, ties: 0 };
        assert_eq!(merged, Tally { wins: 2, losses: 4, ties: 1 });
        assert_eq!(Tally::default().equity().as_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn free_function_rejects_overlap() {
        let hero: HoleCards = "AsKs".parse().unwrap();
        let villain: HoleCards = "QhQd".parse().unwrap();
        let board: Board = "As 7d 9c".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = equity(&hero, &villain, &board, 100, &mut rng).unwrap_err();
        assert!(matches!(err, EquityError::Hand(HandError::DuplicateCard(_))));
    }
}
