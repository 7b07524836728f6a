//! Shrinking: the minimizing search and the reduction steps it is built from.

use std::fmt;

use num_traits::{Float, PrimInt};

use crate::error::PropertyError;
use crate::property::Property;

/// Halve an integer toward zero; zero is minimal
pub fn halve_toward_zero<N: PrimInt>(n: N) -> Option<N> {
    if n.is_zero() {
        None
    } else {
        Some(n / (N::one() + N::one()))
    }
}

/// Halve the distance between `n` and `target`; `target` is minimal
///
/// A value too far from `target` for the distance to be representable jumps
/// straight to `target`.
pub(crate) fn halve_toward<N: PrimInt>(n: N, target: N) -> Option<N> {
    if target.is_zero() {
        return halve_toward_zero(n);
    }
    let two = N::one() + N::one();
    if n == target {
        None
    } else if n > target {
        Some(n.checked_sub(&target).map_or(target, |d| target + d / two))
    } else {
        Some(target.checked_sub(&n).map_or(target, |d| target - d / two))
    }
}

/// Halve a float toward zero; zero is minimal and non-finite values do not reduce
pub fn halve_float_toward_zero<F: Float>(x: F) -> Option<F> {
    if x.is_zero() || !x.is_finite() {
        None
    } else {
        Some(x / (F::one() + F::one()))
    }
}

/// Drop the last element of a sequence; the empty sequence is minimal
pub fn drop_last<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    values.split_last().map(|(_, rest)| rest.to_vec())
}

/// Drop the last character of a string; the empty string is minimal
pub fn drop_last_char(s: &str) -> Option<String> {
    let mut chars = s.chars();
    chars.next_back().map(|_| chars.as_str().to_owned())
}

/// Result of a shrinking operation
#[derive(Debug, Clone, PartialEq)]
pub struct ShrinkResult<T> {
    /// Original value that failed
    pub original: T,
    /// Last value on the reduction chain that still fails
    pub minimal: T,
    /// Number of reductions accepted
    pub steps: usize,
}

/// Configuration for shrinking behavior
#[derive(Debug, Clone)]
pub struct ShrinkConfig {
    /// Maximum number of accepted reductions
    pub max_steps: usize,
    /// Whether to print each accepted step to stderr
    pub verbose: bool,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            max_steps: crate::config::DEFAULT_MAX_SHRINK_STEPS,
            verbose: false,
        }
    }
}

impl ShrinkConfig {
    /// Create a shrink configuration with a custom step cap
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps,
            ..Default::default()
        }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

/// Shrinking engine that follows a single reduction chain
///
/// Starting from a failing value, the engine repeatedly asks for the next
/// reduction. It stops when there is none, or when the reduced value no
/// longer fails, and reports the last value that still failed. Siblings are
/// never explored, so the result is only locally minimal.
pub struct ShrinkEngine {
    config: ShrinkConfig,
}

impl ShrinkEngine {
    /// Create a new shrinking engine with default configuration
    pub fn new() -> Self {
        Self {
            config: ShrinkConfig::default(),
        }
    }

    /// Create a new shrinking engine with custom configuration
    pub fn with_config(config: ShrinkConfig) -> Self {
        Self { config }
    }

    /// Minimize a failing value along the chain produced by `reduce`
    ///
    /// `original` must fail `property`. Returns
    /// [`PropertyError::NonTerminatingReduction`] if more than `max_steps`
    /// reductions keep failing.
    pub fn minimize<T, R, P>(
        &self,
        original: T,
        reduce: R,
        property: &P,
    ) -> Result<ShrinkResult<T>, PropertyError>
    where
        T: Clone + fmt::Debug,
        R: Fn(&T) -> Option<T>,
        P: Property<T> + ?Sized,
    {
        let mut current = original.clone();
        let mut steps = 0;

        while let Some(next) = reduce(&current) {
            if property.holds(&next) {
                break;
            }
            if steps == self.config.max_steps {
                return Err(PropertyError::non_terminating(steps, &current));
            }
            steps += 1;
            if self.config.verbose {
                eprintln!("Shrink step {}: {:?} still fails", steps, next);
            }
            current = next;
        }

        if self.config.verbose {
            eprintln!("Shrinking completed after {} steps", steps);
        }

        Ok(ShrinkResult {
            original,
            minimal: current,
            steps,
        })
    }
}

impl Default for ShrinkEngine {
    fn default() -> Self {
        Self::new()
    }
}
