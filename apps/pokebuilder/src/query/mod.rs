// Catalog queries
// Stateless filtering and sorting of catalog records

pub mod engine;
pub mod filters;

pub use engine::QueryEngine;
pub use filters::{QueryFilters, SortBy, StatFilter, TypeFilter, ALL};
