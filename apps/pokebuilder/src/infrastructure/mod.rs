// Infrastructure layer module
// Contains the filesystem adapters for the catalog and the team store
// Follows Hexagonal Architecture

pub mod csv_catalog;
pub mod repositories;

pub use repositories::CsvTeamRepository;
