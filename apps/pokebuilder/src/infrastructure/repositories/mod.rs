// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod csv_team_repository;

pub use csv_team_repository::CsvTeamRepository;
