//! Arbitrary trait: the default bundle for a type.

use crate::bundle::Bundle;

/// Types with a default generation and reduction policy
///
/// This is the compile-time side of bundle resolution: `check::<T>` asks
/// `T::bundle()` for the bundle to use. Container impls below simply build
/// their bundle from the element's, so an explicit bundle passed to
/// [`check_with`](crate::execution::check_with) and the default one are
/// assembled the same way.
pub trait Arbitrary: Sized {
    /// Build the default bundle for this type
    fn bundle() -> Bundle<Self>;
}

impl Arbitrary for String {
    fn bundle() -> Bundle<Self> {
        Bundle::string_of(char::bundle())
    }
}

impl<T: Arbitrary + Clone + 'static> Arbitrary for Vec<T> {
    fn bundle() -> Bundle<Self> {
        Bundle::vec_of(T::bundle())
    }
}

impl<T: Arbitrary + Clone + 'static> Arbitrary for Option<T> {
    fn bundle() -> Bundle<Self> {
        Bundle::option_of(T::bundle())
    }
}

impl<A, B> Arbitrary for (A, B)
where
    A: Arbitrary + Clone + 'static,
    B: Arbitrary + Clone + 'static,
{
    fn bundle() -> Bundle<Self> {
        Bundle::pair(A::bundle(), B::bundle())
    }
}

impl<A, B, C> Arbitrary for (A, B, C)
where
    A: Arbitrary + Clone + 'static,
    B: Arbitrary + Clone + 'static,
    C: Arbitrary + Clone + 'static,
{
    fn bundle() -> Bundle<Self> {
        Bundle::triple(A::bundle(), B::bundle(), C::bundle())
    }
}

impl<A, B, C, D> Arbitrary for (A, B, C, D)
where
    A: Arbitrary + Clone + 'static,
    B: Arbitrary + Clone + 'static,
    C: Arbitrary + Clone + 'static,
    D: Arbitrary + Clone + 'static,
{
    fn bundle() -> Bundle<Self> {
        Bundle::quad(A::bundle(), B::bundle(), C::bundle(), D::bundle())
    }
}
