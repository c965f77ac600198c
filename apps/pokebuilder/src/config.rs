use std::path::PathBuf;

/// Environment variable naming the catalog file
pub const CATALOG_ENV: &str = "POKEBUILDER_CATALOG";
/// Environment variable naming the team store file
pub const TEAMS_ENV: &str = "POKEBUILDER_TEAMS";

pub const DEFAULT_CATALOG: &str = "Pokemon.csv";
pub const DEFAULT_TEAMS: &str = "saved_teams.csv";

/// File locations the application works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub teams_path: PathBuf,
}

impl AppConfig {
    /// Resolves the configuration from command-line overrides, the process
    /// environment, and a `.env` file if one exists
    pub fn load(catalog: Option<PathBuf>, teams: Option<PathBuf>) -> Self {
        dotenv::dotenv().ok();
        Self::resolve(catalog, teams, |key| std::env::var(key).ok())
    }

    /// Resolves each path from its override, then `lookup`, then the default
    pub fn resolve<F>(catalog: Option<PathBuf>, teams: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            catalog_path: setting(catalog, CATALOG_ENV, DEFAULT_CATALOG, &lookup),
            teams_path: setting(teams, TEAMS_ENV, DEFAULT_TEAMS, &lookup),
        }
    }
}

fn setting<F>(flag: Option<PathBuf>, key: &str, default: &str, lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = flag {
        return path;
    }

    match lookup(key) {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => {
            tracing::warn!("{} not set, using default {}", key, default);
            PathBuf::from(default)
        }
    }
}
