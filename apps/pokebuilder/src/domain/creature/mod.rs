// Creature domain module
// Contains the immutable catalog record, the stat value object, and the catalog itself

#![allow(clippy::module_inception)]

pub mod catalog;
pub mod creature;
pub mod value_objects;

// Re-export main types for convenience
pub use catalog::CatalogStore;
pub use creature::{BaseStats, Creature};
pub use value_objects::Stat;
