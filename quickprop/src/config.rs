//! Configuration types for controlling property runs and value generation.

use std::fmt;

/// Trials per run in the reference configuration
pub const DEFAULT_TRIALS: usize = 20;
/// Cap on accepted reductions before a reduction policy is declared non-terminating
pub const DEFAULT_MAX_SHRINK_STEPS: usize = 10_000;
/// Exclusive upper bound on generated sequence lengths
pub const DEFAULT_MAX_LEN: usize = 50;
/// Exclusive upper bound on generated string lengths, in characters
pub const DEFAULT_MAX_STRING_LEN: usize = 40;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid number of trials (must be > 0)
    InvalidTrials(usize),
    /// Invalid shrink step cap (must be > 0)
    InvalidShrinkSteps(usize),
    /// Invalid sequence length bound (must be > 0)
    InvalidMaxLen(usize),
    /// Invalid string length bound (must be > 0)
    InvalidMaxStringLen(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTrials(n) => {
                write!(f, "Invalid trial count: {} (must be > 0)", n)
            }
            ConfigError::InvalidShrinkSteps(n) => {
                write!(f, "Invalid shrink step cap: {} (must be > 0)", n)
            }
            ConfigError::InvalidMaxLen(n) => {
                write!(f, "Invalid max sequence length: {} (must be > 0)", n)
            }
            ConfigError::InvalidMaxStringLen(n) => {
                write!(f, "Invalid max string length: {} (must be > 0)", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration consulted by bundles while generating values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Sequence lengths are drawn uniformly from `[0, max_len)`
    pub max_len: usize,
    /// String lengths are drawn uniformly from `[0, max_string_len)`
    pub max_string_len: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}

impl GenConfig {
    /// Create a new generation configuration with validation
    pub fn new(max_len: usize, max_string_len: usize) -> Result<Self, ConfigError> {
        let config = Self {
            max_len,
            max_string_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the generation configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_len == 0 {
            return Err(ConfigError::InvalidMaxLen(self.max_len));
        }
        if self.max_string_len == 0 {
            return Err(ConfigError::InvalidMaxStringLen(self.max_string_len));
        }
        Ok(())
    }
}

/// Configuration for a single property run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Number of trials to run before declaring the property passed
    pub trials: usize,
    /// Maximum number of accepted reductions while shrinking
    pub max_shrink_steps: usize,
    /// Seed for the run; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Print per-trial and per-shrink-step diagnostics to stderr
    pub verbose: bool,
    /// Generation parameters handed to every bundle
    pub gen_config: GenConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_shrink_steps: DEFAULT_MAX_SHRINK_STEPS,
            seed: None,
            verbose: false,
            gen_config: GenConfig::default(),
        }
    }
}

impl CheckConfig {
    /// Create a new run configuration with validation
    pub fn new(
        trials: usize,
        max_shrink_steps: usize,
        seed: Option<u64>,
        gen_config: GenConfig,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            trials,
            max_shrink_steps,
            seed,
            verbose: false,
            gen_config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the run configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::InvalidTrials(self.trials));
        }
        if self.max_shrink_steps == 0 {
            return Err(ConfigError::InvalidShrinkSteps(self.max_shrink_steps));
        }
        self.gen_config.validate()
    }

    /// Set the number of trials
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Pin the seed so the run can be replayed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shrink step cap
    pub fn with_max_shrink_steps(mut self, max_shrink_steps: usize) -> Self {
        self.max_shrink_steps = max_shrink_steps;
        self
    }

    /// Replace the generation parameters
    pub fn with_gen_config(mut self, gen_config: GenConfig) -> Self {
        self.gen_config = gen_config;
        self
    }

    /// Enable verbose diagnostics
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}
