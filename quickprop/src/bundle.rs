//! Capability bundles: generation and reduction for one type, passed as a value.
//!
//! A [`Bundle<T>`] pairs a function that draws a random `T` with a function that
//! proposes a strictly smaller `T`. Container bundles are *built* from their
//! element bundles by ordinary function calls, so "a `Vec<T>` is testable
//! whenever `T` is" is a constructor rather than a trait rule:
//!
//! ```rust
//! use quickprop::{Arbitrary, Bundle};
//!
//! let words: Bundle<Vec<String>> = Bundle::vec_of(String::bundle());
//! assert_eq!(words.reduce(&vec!["a".to_string(), "b".to_string()]),
//!            Some(vec!["a".to_string()]));
//! ```

use std::fmt;
use std::sync::Arc;

use rand::{Rng, RngCore};

use crate::config::GenConfig;
use crate::error::BundleError;
use crate::shrink::{drop_last, drop_last_char};

type GenerateFn<T> = dyn Fn(&mut dyn RngCore, &GenConfig) -> T + Send + Sync;
type ReduceFn<T> = dyn Fn(&T) -> Option<T> + Send + Sync;

/// Generation and reduction behavior for values of type `T`
///
/// Bundles are immutable and cheap to clone; composed bundles hold clones of
/// the bundles they were built from.
pub struct Bundle<T> {
    generate: Arc<GenerateFn<T>>,
    reduce: Arc<ReduceFn<T>>,
}

impl<T> Clone for Bundle<T> {
    fn clone(&self) -> Self {
        Self {
            generate: Arc::clone(&self.generate),
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<T> fmt::Debug for Bundle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T> Bundle<T> {
    /// Build a bundle from a generation function and a reduction function
    ///
    /// `reduce` must be strictly decreasing under some well-founded order on
    /// `T` and must return `None` for minimal values, otherwise shrinking
    /// hits the step cap and the run reports a non-terminating reduction.
    pub fn new<G, R>(generate: G, reduce: R) -> Self
    where
        G: Fn(&mut dyn RngCore, &GenConfig) -> T + Send + Sync + 'static,
        R: Fn(&T) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            generate: Arc::new(generate),
            reduce: Arc::new(reduce),
        }
    }

    /// Build a bundle whose values can never be reduced
    pub fn irreducible<G>(generate: G) -> Self
    where
        G: Fn(&mut dyn RngCore, &GenConfig) -> T + Send + Sync + 'static,
    {
        Self::new(generate, |_| None)
    }

    /// Draw one random value
    pub fn generate(&self, rng: &mut dyn RngCore, config: &GenConfig) -> T {
        (self.generate)(rng, config)
    }

    /// Propose a strictly smaller value, or `None` if `value` is minimal
    pub fn reduce(&self, value: &T) -> Option<T> {
        (self.reduce)(value)
    }

    /// Keep the generator and replace the reduction policy
    pub fn with_reduce<R>(self, reduce: R) -> Self
    where
        R: Fn(&T) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            generate: self.generate,
            reduce: Arc::new(reduce),
        }
    }

    /// Derive a bundle for `U` through a pair of conversions
    ///
    /// `from` must invert `into` on every value `into` can produce, so that
    /// reductions of the underlying `T` remain strictly decreasing for `U`.
    pub fn map<U, F, G>(self, into: F, from: G) -> Bundle<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
        G: Fn(&U) -> T + Send + Sync + 'static,
    {
        let into = Arc::new(into);
        let generate_into = Arc::clone(&into);
        let generator = self.clone();
        Bundle::new(
            move |rng, config| generate_into(generator.generate(rng, config)),
            move |value: &U| self.reduce(&from(value)).map(|smaller| into(smaller)),
        )
    }
}

impl<T: Clone + 'static> Bundle<Vec<T>> {
    /// Sequences of independently drawn elements, length uniform over `[0, max_len)`
    ///
    /// Reduction drops the last element; elements themselves are never reduced.
    pub fn vec_of(element: Bundle<T>) -> Self {
        Bundle::new(
            move |rng, config| {
                let len = rng.gen_range(0..config.max_len);
                (0..len).map(|_| element.generate(rng, config)).collect()
            },
            |values: &Vec<T>| drop_last(values),
        )
    }

    /// Like [`Bundle::vec_of`], with a fixed length bound instead of the configured one
    pub fn vec_of_max_len(element: Bundle<T>, max_len: usize) -> Result<Self, BundleError> {
        if max_len == 0 {
            return Err(BundleError::ZeroLength);
        }
        Ok(Bundle::new(
            move |rng, config| {
                let len = rng.gen_range(0..max_len);
                (0..len).map(|_| element.generate(rng, config)).collect()
            },
            |values: &Vec<T>| drop_last(values),
        ))
    }
}

impl Bundle<String> {
    /// Strings of independently drawn characters, length uniform over `[0, max_string_len)`
    ///
    /// Reduction drops the last character.
    pub fn string_of(chars: Bundle<char>) -> Self {
        Bundle::new(
            move |rng, config| {
                let len = rng.gen_range(0..config.max_string_len);
                (0..len).map(|_| chars.generate(rng, config)).collect()
            },
            |s: &String| drop_last_char(s),
        )
    }
}

impl<T: Clone + 'static> Bundle<Option<T>> {
    /// `None` half of the time, otherwise `Some` of an inner draw
    ///
    /// `Some(x)` reduces to `Some(x')` while `x` reduces, then to `None`.
    pub fn option_of(inner: Bundle<T>) -> Self {
        let generator = inner.clone();
        Bundle::new(
            move |rng, config| {
                if rng.gen_bool(0.5) {
                    None
                } else {
                    Some(generator.generate(rng, config))
                }
            },
            move |value: &Option<T>| {
                let value = value.as_ref()?;
                Some(inner.reduce(value))
            },
        )
    }
}

macro_rules! tuple_bundle {
    ($(#[$doc:meta])* $name:ident => $(($T:ident, $b:ident, $idx:tt)),+) => {
        impl<$($T: Clone + 'static),+> Bundle<($($T,)+)> {
            $(#[$doc])*
            pub fn $name($($b: Bundle<$T>),+) -> Self {
                let generators = ($($b.clone(),)+);
                let reducers = ($($b,)+);
                Bundle::new(
                    move |rng, config| ($(generators.$idx.generate(rng, config),)+),
                    move |value: &($($T,)+)| {
                        $(
                            if let Some(smaller) = reducers.$idx.reduce(&value.$idx) {
                                let mut next = value.clone();
                                next.$idx = smaller;
                                return Some(next);
                            }
                        )+
                        None
                    },
                )
            }
        }
    };
}

tuple_bundle!(
    /// Pairs of independent draws; the first reducible field is reduced
    pair => (A, a, 0), (B, b, 1)
);
tuple_bundle!(
    /// Triples of independent draws; the first reducible field is reduced
    triple => (A, a, 0), (B, b, 1), (C, c, 2)
);
tuple_bundle!(
    /// Quadruples of independent draws; the first reducible field is reduced
    quad => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3)
);
