//! poker-equity: heads-up Texas Hold'em equity by Monte Carlo simulation
//!
//! Goals:
//! - Rank-correct seven-card evaluation with explicit tie-break payloads
//! - Win / loss / tie probabilities, ties never split between players
//! - Reproducible runs through an explicitly passed, seedable RNG
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: equity of a matchup
//! ```
//! use poker_equity::equity::Simulator;
//! use poker_equity::hand::Matchup;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let matchup = Matchup::parse("AhKh", "QsQd", "2c7h9h").unwrap();
//! let sim = Simulator::new(matchup).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let eq = sim.run(5_000, &mut rng).unwrap();
//! assert!((eq.hero_win + eq.villain_win + eq.tie - 1.0).abs() < 1e-9);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --release --bin poker-equity -- AhKh QsQd --board 2c7h9h
//! ```

pub mod cards;
pub mod comparator;
pub mod config;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
