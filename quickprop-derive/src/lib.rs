//! Derive macro for the quickprop property testing library
//!
//! This crate provides `#[derive(Arbitrary)]`, which builds a default bundle
//! for a struct or enum out of the default bundles of its fields.

use proc_macro::TokenStream;

mod derive;

/// Derive macro implementing `quickprop::Arbitrary`
///
/// Every field is drawn from its own default bundle. Reduction works one
/// field at a time: the first field (in declaration order) whose bundle can
/// reduce it is reduced and the other fields are cloned. A value none of
/// whose fields can reduce is minimal. Enum variants are drawn uniformly and
/// a value never reduces into a different variant.
///
/// # Basic Usage
///
/// ```rust
/// use quickprop::Arbitrary;
///
/// #[derive(Debug, Clone, Arbitrary)]
/// struct City {
///     name: String,
///     population: u32,
/// }
/// ```
///
/// # Explicit field bundles
///
/// A field can name a function returning its bundle, which is how container
/// fields get a bundle built from something other than the element default:
///
/// ```rust
/// use quickprop::{Arbitrary, Bundle};
///
/// fn short_names() -> Bundle<Vec<String>> {
///     Bundle::vec_of_max_len(String::bundle(), 4).unwrap()
/// }
///
/// #[derive(Debug, Clone, Arbitrary)]
/// struct Roster {
///     #[arbitrary(with = "short_names")]
///     names: Vec<String>,
/// }
/// ```
///
/// # Generic Types
///
/// Type parameters receive `Arbitrary + Clone + 'static` bounds:
///
/// ```rust
/// use quickprop::Arbitrary;
///
/// #[derive(Debug, Clone, Arbitrary)]
/// struct Labeled<T> {
///     label: String,
///     value: T,
/// }
/// ```
#[proc_macro_derive(Arbitrary, attributes(arbitrary))]
pub fn derive_arbitrary(input: TokenStream) -> TokenStream {
    derive::derive_arbitrary_impl(input)
}
