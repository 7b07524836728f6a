//! # quickprop - QuickCheck-style property testing with explicit bundles
//!
//! quickprop draws random values, evaluates a claimed property on each, and
//! on the first failure shrinks the counterexample along a single reduction
//! chain until it stops failing.
//!
//! Generation and reduction for a type travel together as a [`Bundle`]. Plain
//! types get a default bundle through [`Arbitrary`]; container bundles are
//! built from element bundles and passed explicitly.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickprop::{Arbitrary, Bundle, CheckConfig, check, check_with_config};
//!
//! // Default bundle, resolved from the property's argument type
//! let report = check("x * 1 == 1 * x", |x: &i64| x.wrapping_mul(1) == 1_i64.wrapping_mul(*x));
//! assert!(report.passed());
//!
//! // Explicit container bundle built from its element bundle
//! let strings = Bundle::vec_of(String::bundle());
//! let report = check_with_config(
//!     "reversing twice is the identity",
//!     strings,
//!     |v: &Vec<String>| {
//!         let mut w = v.clone();
//!         w.reverse();
//!         w.reverse();
//!         w == *v
//!     },
//!     CheckConfig::default().with_seed(42),
//! );
//! assert!(report.passed());
//! ```

// Public modules
pub mod arbitrary;
pub mod bundle;
pub mod config;
pub mod error;
pub mod execution;
pub mod primitives;
pub mod property;
pub mod registry;
pub mod report;
pub mod rng;
pub mod shrink;

// Re-export the main public API
pub use arbitrary::Arbitrary;
pub use bundle::Bundle;
pub use config::{CheckConfig, ConfigError, GenConfig};
pub use error::{BundleError, PropertyError};
pub use execution::{
    Outcome, Runner, check, check_registered, check_registered_with_config, check_with,
    check_with_config,
};
pub use property::Property;
pub use registry::BundleRegistry;
pub use report::{Report, Verdict};
pub use rng::{create_seeded_rng, fresh_seed};
pub use shrink::{
    ShrinkConfig, ShrinkEngine, ShrinkResult, drop_last, drop_last_char, halve_float_toward_zero,
    halve_toward_zero,
};

// Derived impls draw enum variants through this re-export
pub use rand;

// Re-export derive macro from separate crate when derive feature is enabled
#[cfg(feature = "derive")]
pub use quickprop_derive::Arbitrary;
