use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamEvent};

/// Header of the team store file
pub const STORE_HEADER: [&str; 2] = ["Team Name", "Members"];

#[derive(Debug, Deserialize)]
struct TeamRow {
    #[serde(rename = "Team Name")]
    team_name: String,
    #[serde(rename = "Members", default)]
    members: String,
}

/// CSV-file implementation of TeamRepository
///
/// The store has one row per team under a `Team Name,Members` header, with
/// the members comma-joined into a single quoted field. Every mutation
/// rewrites the whole file; there is no locking, so concurrent writers from
/// other processes overwrite each other.
#[derive(Debug)]
pub struct CsvTeamRepository {
    path: PathBuf,
    teams: Vec<Team>,
}

impl CsvTeamRepository {
    /// Opens the store at `path`
    ///
    /// A missing file gives an empty collection. A file that cannot be
    /// parsed also gives an empty collection, with a warning: the next
    /// mutation will overwrite it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let teams = match read_store(&path) {
            Ok(teams) => teams,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Team store unreadable, starting with no teams; saving will overwrite it"
                );
                Vec::new()
            }
        };

        tracing::debug!(path = %path.display(), teams = teams.len(), "Team store opened");
        Self { path, teams }
    }

    /// Opens the store, failing instead of falling back to an empty collection
    pub fn try_open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let teams = read_store(&path)?;
        Ok(Self { path, teams })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn position(&self, team_name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.name().matches(team_name))
    }

    /// Writes `teams` to disk and only then makes them the live collection
    ///
    /// On a failed write the in-memory collection is left as it was.
    fn commit(&mut self, teams: Vec<Team>) -> StoreResult<()> {
        write_store(&self.path, &teams)?;
        self.teams = teams;
        Ok(())
    }

    fn record(&self, event: &TeamEvent) {
        match event {
            TeamEvent::Created { team_name, members } => {
                tracing::info!(team = %team_name, members = members.len(), "Team saved")
            }
            TeamEvent::MemberAdded { team_name, member } => {
                tracing::info!(team = %team_name, member = %member, "Member added")
            }
            TeamEvent::MemberRemoved { team_name, member } => {
                tracing::info!(team = %team_name, member = %member, "Member removed")
            }
            TeamEvent::Deleted { team_name, index } => {
                tracing::info!(team = %team_name, index = index, "Team deleted")
            }
        }
    }
}

impl TeamRepository for CsvTeamRepository {
    fn load(&mut self) -> StoreResult<Vec<Team>> {
        self.teams = read_store(&self.path)?;
        Ok(self.teams.clone())
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn save(&mut self, name: &str, members: &[String]) -> StoreResult<()> {
        if name.trim().is_empty() || members.is_empty() {
            tracing::debug!(team = %name, "Nothing to save");
            return Ok(());
        }

        let (team, events) = match Team::new(name, members.to_vec()) {
            Ok(created) => created,
            Err(reason) => {
                tracing::debug!(team = %name, reason = %reason, "Nothing to save");
                return Ok(());
            }
        };

        let mut staged = self.teams.clone();
        staged.push(team);
        self.commit(staged)?;
        events.iter().for_each(|e| self.record(e));
        Ok(())
    }

    fn add_member(&mut self, team_name: &str, creature: &str) -> StoreResult<()> {
        let Some(index) = self.position(team_name) else {
            return self.save(team_name, &[creature.to_string()]);
        };

        let mut staged = self.teams.clone();
        match staged[index].add_member(creature) {
            Some(event) => {
                self.commit(staged)?;
                self.record(&event);
            }
            None => tracing::debug!(team = %team_name, member = %creature, "Member not added"),
        }
        Ok(())
    }

    fn remove_member(&mut self, team_name: &str, creature: &str) -> StoreResult<()> {
        let Some(index) = self.position(team_name) else {
            tracing::debug!(team = %team_name, "No such team");
            return Ok(());
        };

        let mut staged = self.teams.clone();
        match staged[index].remove_member(creature) {
            Some(event) => {
                self.commit(staged)?;
                self.record(&event);
            }
            None => tracing::debug!(team = %team_name, member = %creature, "Not a member"),
        }
        Ok(())
    }

    fn delete_at(&mut self, index: usize) -> StoreResult<()> {
        if index >= self.teams.len() {
            tracing::debug!(index = index, teams = self.teams.len(), "Delete index out of range");
            return Ok(());
        }

        let mut staged = self.teams.clone();
        let removed = staged.remove(index);
        self.commit(staged)?;
        self.record(&TeamEvent::Deleted {
            team_name: removed.name().to_string(),
            index,
        });
        Ok(())
    }
}

/// Rewrites the whole store file with `teams`
fn write_store(path: &Path, teams: &[Team]) -> StoreResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(STORE_HEADER)?;
    for team in teams {
        writer.write_record([team.name().as_str(), team.members_field().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads every team row from `path`; a missing file yields no teams
fn read_store(path: &Path) -> StoreResult<Vec<Team>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let corrupt = |reason: String| StoreError::Corrupt {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| corrupt(format!("cannot read header row: {}", e)))?;
    if headers.len() != STORE_HEADER.len()
        || !STORE_HEADER.iter().all(|col| headers.iter().any(|h| h.trim() == *col))
    {
        return Err(corrupt(format!(
            "expected header `{}`, found `{}`",
            STORE_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut teams = Vec::new();
    for (row, result) in reader.deserialize::<TeamRow>().enumerate() {
        let row = result.map_err(|e| corrupt(format!("row {}: {}", row + 2, e)))?;
        teams.push(Team::from_persistence(row.team_name, &row.members));
    }
    Ok(teams)
}
