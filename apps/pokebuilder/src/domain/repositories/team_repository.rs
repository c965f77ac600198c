use crate::domain::creature::{CatalogStore, Creature};
use crate::domain::errors::StoreResult;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Teams form an ordered collection addressed by position. The repository
/// owns that collection and is the only writer of its backing store; callers
/// get copies.
///
/// Mutations that have nothing to do (empty input, unknown team, member
/// already present or absent, index out of range) succeed without changing
/// anything. Errors are reserved for a store that cannot be read or written.
///
/// Team names are compared with [`TeamName::matches`](crate::domain::team::TeamName::matches)
/// on every path; member names are compared exactly.
pub trait TeamRepository {
    /// Re-reads the backing store and replaces the in-memory collection
    fn load(&mut self) -> StoreResult<Vec<Team>>;

    /// Re-syncs the in-memory collection from the backing store
    fn refresh(&mut self) -> StoreResult<()> {
        self.load().map(|_| ())
    }

    /// The in-memory collection in storage order
    fn teams(&self) -> &[Team];

    /// First team whose name matches, in storage order
    fn find_by_name(&self, name: &str) -> Option<Team> {
        self.teams()
            .iter()
            .find(|team| team.name().matches(name))
            .cloned()
    }

    /// Appends a new team row; no-op if the name or the member list is empty
    ///
    /// Does not look for an existing team with the same name.
    fn save(&mut self, name: &str, members: &[String]) -> StoreResult<()>;

    /// Appends `creature` to the team, creating the team if it does not exist
    fn add_member(&mut self, team_name: &str, creature: &str) -> StoreResult<()>;

    /// Removes one occurrence of `creature` from the team
    fn remove_member(&mut self, team_name: &str, creature: &str) -> StoreResult<()>;

    /// Deletes the team at `index`; later teams shift down by one
    fn delete_at(&mut self, index: usize) -> StoreResult<()>;

    /// Refreshes from the backing store, then lists team names in storage order
    fn all_team_names(&mut self) -> StoreResult<Vec<String>> {
        self.refresh()?;
        Ok(self
            .teams()
            .iter()
            .map(|team| team.name().to_string())
            .collect())
    }

    /// Member names of the matching team; empty if no team matches
    fn team_members(&self, team_name: &str) -> Vec<String> {
        self.find_by_name(team_name)
            .map(|team| team.members().to_vec())
            .unwrap_or_default()
    }

    /// Catalog records of the team's members, in catalog order
    fn team_creatures(&self, catalog: &CatalogStore, team_name: &str) -> Vec<Creature> {
        catalog.names_by_list(&self.team_members(team_name))
    }

    /// Number of teams in the in-memory collection
    fn len(&self) -> usize {
        self.teams().len()
    }

    fn is_empty(&self) -> bool {
        self.teams().is_empty()
    }
}
