//! Record collections
//!
//! In-memory collections of immunization records keyed by their storage key,
//! mirroring one snapshot of the `imunisasi` collection.

pub mod immunization;

pub use immunization::ImmunizationCollection;

use std::sync::Arc;

/// A trait for collections of models that can be queried and modified.
///
/// Models are keyed by their storage key.
pub trait ModelCollection<T> {
    /// Add or replace a model under a key
    fn add(&mut self, id: impl Into<String>, model: T);

    /// Get a model by its key
    fn get(&self, id: &str) -> Option<Arc<T>>;

    /// Remove a model by its key
    fn remove(&mut self, id: &str) -> Option<Arc<T>>;

    /// Get all models in the collection, ordered by key
    fn all(&self) -> Vec<Arc<T>>;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;
}
