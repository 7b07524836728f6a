//! Type-tagged registry of default bundles.
//!
//! [`Arbitrary`](crate::Arbitrary) resolves default bundles at compile time.
//! The registry covers the cases where the default has to be chosen at run
//! time, for instance a harness overriding the integer bundle with a ranged
//! one. Lookups are keyed by `TypeId`; values are never inspected.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::arbitrary::Arbitrary;
use crate::bundle::Bundle;

/// Registry mapping types to their bundles
pub struct BundleRegistry {
    bundles: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl BundleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Create a registry holding the default bundles of the common scalar types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_default::<i32>();
        registry.register_default::<i64>();
        registry.register_default::<u32>();
        registry.register_default::<u64>();
        registry.register_default::<usize>();
        registry.register_default::<bool>();
        registry.register_default::<char>();
        registry.register_default::<String>();
        registry
    }

    /// Register a bundle for `T`, replacing any previous one
    pub fn register<T: 'static>(&mut self, bundle: Bundle<T>) {
        self.bundles.insert(TypeId::of::<T>(), Box::new(bundle));
    }

    /// Register `T`'s [`Arbitrary`] bundle
    pub fn register_default<T: Arbitrary + 'static>(&mut self) {
        self.register(T::bundle());
    }

    /// Get the bundle registered for `T`
    pub fn get<T: 'static>(&self) -> Option<Bundle<T>> {
        self.bundles
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<Bundle<T>>())
            .cloned()
    }

    /// Check if a bundle is registered for `T`
    pub fn contains<T: 'static>(&self) -> bool {
        self.bundles.contains_key(&TypeId::of::<T>())
    }

    /// Remove the bundle for `T`, returning whether one was registered
    pub fn remove<T: 'static>(&mut self) -> bool {
        self.bundles.remove(&TypeId::of::<T>()).is_some()
    }

    /// Get the number of registered bundles
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl Default for BundleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
