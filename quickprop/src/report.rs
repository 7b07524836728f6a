//! Human-readable reports of property runs.
//!
//! Reports are advisory: producing or printing one never panics and never
//! affects control flow. Callers that want a failure to stop them (a
//! `#[test]` function, a strict CLI mode) ask for that explicitly with
//! [`Report::assert_passed`] or by inspecting [`Report::passed`].

use std::fmt;

use crate::error::PropertyError;
use crate::execution::Outcome;

/// Final verdict of a property run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// Every trial passed
    Passed,
    /// A counterexample was found
    Failed,
    /// The run was aborted by a [`PropertyError`]
    Errored,
}

/// Outcome of a property run, rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Label the property was checked under
    pub label: String,
    /// Pass, fail or error
    pub verdict: Verdict,
    /// Trials run: all of them on a pass, up to the failing one on a failure
    pub trials: usize,
    /// The first failing sample
    pub original: Option<String>,
    /// The minimized counterexample
    pub minimized: Option<String>,
    /// Reductions accepted while minimizing
    pub shrink_steps: usize,
    /// Seed to replay the run with
    pub seed: u64,
    /// Error that aborted the run
    pub error: Option<String>,
}

impl Report {
    /// Build a report from the result of a run
    pub fn new<T: fmt::Debug>(
        label: impl Into<String>,
        seed: u64,
        result: &Result<Outcome<T>, PropertyError>,
    ) -> Self {
        let mut report = Self {
            label: label.into(),
            verdict: Verdict::Passed,
            trials: 0,
            original: None,
            minimized: None,
            shrink_steps: 0,
            seed,
            error: None,
        };

        match result {
            Ok(Outcome::Passed { trials }) => {
                report.trials = *trials;
            }
            Ok(Outcome::Failed {
                original,
                minimized,
                shrink_steps,
                trial,
            }) => {
                report.verdict = Verdict::Failed;
                report.trials = *trial;
                report.original = Some(format!("{:?}", original));
                report.minimized = Some(format!("{:?}", minimized));
                report.shrink_steps = *shrink_steps;
            }
            Err(error) => {
                report.verdict = Verdict::Errored;
                report.error = Some(error.to_string());
            }
        }

        report
    }

    /// Whether every trial passed
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    /// Panic with the rendered report unless the property passed
    pub fn assert_passed(&self) {
        if !self.passed() {
            panic!("{}", self);
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Verdict::Passed => {
                write!(f, "\"{}\" passed {} tests.", self.label, self.trials)
            }
            Verdict::Failed => {
                write!(
                    f,
                    "\"{}\" doesn't hold: {}",
                    self.label,
                    self.minimized.as_deref().unwrap_or("?")
                )?;
                write!(
                    f,
                    "\n  original: {}",
                    self.original.as_deref().unwrap_or("?")
                )?;
                write!(
                    f,
                    "\n  trial {}, {} shrink steps, seed {}",
                    self.trials, self.shrink_steps, self.seed
                )
            }
            Verdict::Errored => {
                write!(
                    f,
                    "\"{}\" errored: {} (seed {})",
                    self.label,
                    self.error.as_deref().unwrap_or("unknown error"),
                    self.seed
                )
            }
        }
    }
}
