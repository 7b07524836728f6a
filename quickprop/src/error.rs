//! Error types for bundle construction and property runs.
//!
//! A property that evaluates to `false` is not an error: it is the detection
//! signal and surfaces as [`Outcome::Failed`](crate::execution::Outcome). The
//! variants here describe defects in how a run or a bundle was put together.

use std::fmt;

use crate::config::ConfigError;

/// Errors that abort a property run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// A reduction policy kept producing failing values past the shrink step cap
    NonTerminatingReduction {
        steps: usize,
        last: String,
    },

    /// A bundle's generator panicked while drawing a value
    GenerationFailed {
        message: String,
        trial: usize,
    },

    /// No default bundle is registered for the requested type
    MissingBundle { type_name: String },

    /// The run configuration is invalid
    Config(ConfigError),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::NonTerminatingReduction { steps, last } => {
                write!(
                    f,
                    "Reduction did not terminate after {} steps (last failing value: {})",
                    steps, last
                )
            }
            PropertyError::GenerationFailed { message, trial } => {
                write!(f, "Generation failed on trial {}: {}", trial, message)
            }
            PropertyError::MissingBundle { type_name } => {
                write!(f, "No bundle registered for type {}", type_name)
            }
            PropertyError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for PropertyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for PropertyError {
    fn from(err: ConfigError) -> Self {
        PropertyError::Config(err)
    }
}

impl PropertyError {
    /// Create a non-terminating reduction error, rendering the last failing value
    pub fn non_terminating(steps: usize, last: &impl fmt::Debug) -> Self {
        Self::NonTerminatingReduction {
            steps,
            last: format!("{:?}", last),
        }
    }

    /// Create a generation failure from a caught panic payload
    pub fn generation_panicked(payload: &(dyn std::any::Any + Send), trial: usize) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "generator panicked".to_string()
        };
        Self::GenerationFailed { message, trial }
    }
}

/// Errors raised while constructing a bundle whose domain cannot be represented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    /// The requested range contains no values
    EmptyRange { lo: String, hi: String },
    /// A container bundle was given a zero length bound
    ZeroLength,
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleError::EmptyRange { lo, hi } => {
                write!(f, "Empty generation range {}..{}", lo, hi)
            }
            BundleError::ZeroLength => write!(f, "Length bound must be > 0"),
        }
    }
}

impl std::error::Error for BundleError {}
