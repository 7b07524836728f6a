//! Property definition trait.

/// A claimed universal property over values of type `T`
///
/// Properties must be pure: evaluating the same value twice must give the
/// same answer, since shrinking re-evaluates candidates and assumes it.
pub trait Property<T: ?Sized> {
    /// Whether the property holds for `value`
    fn holds(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Property<T> for F
where
    F: Fn(&T) -> bool,
{
    fn holds(&self, value: &T) -> bool {
        self(value)
    }
}
