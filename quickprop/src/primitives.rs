//! Default bundles for primitive types and bounded integer ranges.

use std::fmt;
use std::ops::Range;

use num_traits::PrimInt;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::arbitrary::Arbitrary;
use crate::bundle::Bundle;
use crate::error::BundleError;
use crate::shrink::{halve_float_toward_zero, halve_toward, halve_toward_zero};

macro_rules! impl_int_arbitrary {
    ($($t:ty),*) => {
        $(
            impl Arbitrary for $t {
                /// Uniform over the full range of the type, halving toward zero
                fn bundle() -> Bundle<Self> {
                    Bundle::new(
                        |rng, _config| rng.r#gen::<$t>(),
                        |n: &$t| halve_toward_zero(*n),
                    )
                }
            }
        )*
    };
}

impl_int_arbitrary!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_float_arbitrary {
    ($($t:ty),*) => {
        $(
            impl Arbitrary for $t {
                /// Finite values uniform over `[-1000, 1000)`, halving toward zero
                fn bundle() -> Bundle<Self> {
                    Bundle::new(
                        |rng, _config| rng.gen_range(-1000.0..1000.0),
                        |x: &$t| halve_float_toward_zero(*x),
                    )
                }
            }
        )*
    };
}

impl_float_arbitrary!(f32, f64);

impl Arbitrary for bool {
    fn bundle() -> Bundle<Self> {
        Bundle::new(|rng, _config| rng.r#gen(), |b: &bool| b.then_some(false))
    }
}

impl Arbitrary for char {
    /// Uniform over all Unicode scalar values; characters do not reduce
    fn bundle() -> Bundle<Self> {
        Bundle::irreducible(|rng, _config| rng.r#gen())
    }
}

impl Bundle<char> {
    /// Uppercase ASCII letters `'A'..='Z'`
    pub fn uppercase_ascii() -> Self {
        Bundle::irreducible(|rng, _config| rng.gen_range('A'..='Z'))
    }
}

impl<N> Bundle<N>
where
    N: PrimInt + SampleUniform + fmt::Debug + Send + Sync + 'static,
{
    /// Integers uniform over `[range.start, range.end)`
    ///
    /// Reduction halves the distance toward the value in range closest to
    /// zero, so reduced values never leave the range. An empty range is
    /// rejected here rather than narrowed silently.
    pub fn in_range(range: Range<N>) -> Result<Self, BundleError> {
        let Range { start: lo, end: hi } = range;
        if lo >= hi {
            return Err(BundleError::EmptyRange {
                lo: format!("{:?}", lo),
                hi: format!("{:?}", hi),
            });
        }

        let target = if lo > N::zero() {
            lo
        } else if hi <= N::zero() {
            hi - N::one()
        } else {
            N::zero()
        };

        Ok(Bundle::new(
            move |rng, _config| rng.gen_range(lo..hi),
            move |n: &N| halve_toward(*n, target),
        ))
    }
}
