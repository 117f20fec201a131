/// Trials run when the caller does not choose a count.
pub const DEFAULT_TRIALS: u32 = 10_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("trial count must be positive")]
    NoTrials,
    #[error("thread count must be positive")]
    NoThreads,
}

/// How a simulation run is carried out.
///
/// ```
/// use poker_equity::config::{SimulationConfig, DEFAULT_TRIALS};
///
/// let config = SimulationConfig::default().with_seed(7).with_threads(4);
/// assert_eq!(config.trials, DEFAULT_TRIALS);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: u32,
    /// Fixed seed for reproducible runs; drawn from the thread RNG when unset.
    pub seed: Option<u64>,
    /// 1 runs the plain sequential loop; more shards the trials over rayon.
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: DEFAULT_TRIALS, seed: None, threads: 1 }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.trials, 10_000);
        assert_eq!(c.seed, None);
        assert_eq!(c.threads, 1);
    }

    #[test]
    fn zero_trials_or_threads_rejected() {
        let c = SimulationConfig::default().with_trials(0);
        assert_eq!(c.validate(), Err(ConfigError::NoTrials));
        let c = SimulationConfig::default().with_threads(0);
        assert_eq!(c.validate(), Err(ConfigError::NoThreads));
    }
}
