//! Pokebuilder Library
//!
//! Browse a fixed creature catalog, assemble named teams, persist them to a
//! CSV store, and compute the data behind the catalog and team charts.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod query;
