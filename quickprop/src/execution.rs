//! Property run execution: draw, evaluate, fail fast, shrink.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::arbitrary::Arbitrary;
use crate::bundle::Bundle;
use crate::config::CheckConfig;
use crate::error::PropertyError;
use crate::property::Property;
use crate::registry::BundleRegistry;
use crate::report::Report;
use crate::rng::{create_seeded_rng, resolve_seed};
use crate::shrink::{ShrinkConfig, ShrinkEngine};

/// Outcome of a property run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Every trial passed
    Passed { trials: usize },
    /// Trial `trial` (1-based) failed on `original`, which minimized to `minimized`
    Failed {
        original: T,
        minimized: T,
        shrink_steps: usize,
        trial: usize,
    },
}

impl<T> Outcome<T> {
    /// Check if the property passed
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed { .. })
    }

    /// Check if a counterexample was found
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// The minimized counterexample, if any
    pub fn minimized(&self) -> Option<&T> {
        match self {
            Outcome::Passed { .. } => None,
            Outcome::Failed { minimized, .. } => Some(minimized),
        }
    }
}

/// Runs a property against values drawn from a bundle
///
/// The seed is fixed when the runner is created, so every call to
/// [`Runner::run`] on the same runner draws the same samples.
#[derive(Debug, Clone)]
pub struct Runner {
    config: CheckConfig,
    seed: u64,
}

impl Runner {
    /// Create a runner, drawing a fresh seed unless the config pins one
    pub fn new(config: CheckConfig) -> Self {
        let seed = resolve_seed(config.seed);
        Self { config, seed }
    }

    /// The configuration this runner was created with
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The seed every run of this runner uses
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the property for the configured number of trials
    ///
    /// Stops at the first failing sample, minimizes it and returns
    /// [`Outcome::Failed`]. Returns [`Outcome::Passed`] if every trial passes.
    pub fn run<T, P>(
        &self,
        bundle: &Bundle<T>,
        property: &P,
    ) -> Result<Outcome<T>, PropertyError>
    where
        T: Clone + fmt::Debug,
        P: Property<T> + ?Sized,
    {
        self.config.validate()?;

        let mut rng = create_seeded_rng(self.seed);
        let gen_config = &self.config.gen_config;

        for trial in 1..=self.config.trials {
            let value = panic::catch_unwind(AssertUnwindSafe(|| {
                bundle.generate(&mut rng, gen_config)
            }))
            .map_err(|payload| PropertyError::generation_panicked(payload.as_ref(), trial))?;

            if property.holds(&value) {
                continue;
            }

            if self.config.verbose {
                eprintln!("Trial {}: property failed for {:?}, shrinking", trial, value);
            }

            let engine = ShrinkEngine::with_config(ShrinkConfig {
                max_steps: self.config.max_shrink_steps,
                verbose: self.config.verbose,
            });
            let shrunk = engine.minimize(value, |v: &T| bundle.reduce(v), property)?;

            return Ok(Outcome::Failed {
                original: shrunk.original,
                minimized: shrunk.minimal,
                shrink_steps: shrunk.steps,
                trial,
            });
        }

        if self.config.verbose {
            eprintln!("All {} trials passed (seed {})", self.config.trials, self.seed);
        }

        Ok(Outcome::Passed {
            trials: self.config.trials,
        })
    }

    /// Run the property and render the result under `label`
    pub fn report<T, P>(&self, label: &str, bundle: &Bundle<T>, property: &P) -> Report
    where
        T: Clone + fmt::Debug,
        P: Property<T> + ?Sized,
    {
        Report::new(label, self.seed, &self.run(bundle, property))
    }
}

/// Check a property over `T` using its default bundle, printing the report
///
/// ```rust
/// use quickprop::check;
///
/// let report = check("x * 1 == 1 * x", |x: &i64| x.wrapping_mul(1) == 1_i64.wrapping_mul(*x));
/// assert!(report.passed());
/// ```
pub fn check<T, P>(label: &str, property: P) -> Report
where
    T: Arbitrary + Clone + fmt::Debug,
    P: Property<T>,
{
    check_with(label, T::bundle(), property)
}

/// Check a property using an explicitly built bundle, printing the report
pub fn check_with<T, P>(label: &str, bundle: Bundle<T>, property: P) -> Report
where
    T: Clone + fmt::Debug,
    P: Property<T>,
{
    check_with_config(label, bundle, property, CheckConfig::default())
}

/// Check a property using an explicit bundle and configuration, printing the report
pub fn check_with_config<T, P>(
    label: &str,
    bundle: Bundle<T>,
    property: P,
    config: CheckConfig,
) -> Report
where
    T: Clone + fmt::Debug,
    P: Property<T>,
{
    let report = Runner::new(config).report(label, &bundle, &property);
    println!("{}", report);
    report
}

/// Check a property using the bundle registered for `T`, printing the report
///
/// A missing bundle yields an errored report rather than a panic.
pub fn check_registered<T, P>(label: &str, registry: &BundleRegistry, property: P) -> Report
where
    T: Clone + fmt::Debug + 'static,
    P: Property<T>,
{
    check_registered_with_config(label, registry, property, CheckConfig::default())
}

/// Check a property using the bundle registered for `T` and an explicit configuration
pub fn check_registered_with_config<T, P>(
    label: &str,
    registry: &BundleRegistry,
    property: P,
    config: CheckConfig,
) -> Report
where
    T: Clone + fmt::Debug + 'static,
    P: Property<T>,
{
    let runner = Runner::new(config);
    let report = match registry.get::<T>() {
        Some(bundle) => runner.report(label, &bundle, &property),
        None => {
            let missing: Result<Outcome<T>, PropertyError> = Err(PropertyError::MissingBundle {
                type_name: std::any::type_name::<T>().to_string(),
            });
            Report::new(label, runner.seed(), &missing)
        }
    };
    println!("{}", report);
    report
}
