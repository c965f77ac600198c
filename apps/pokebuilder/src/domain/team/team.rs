use super::events::TeamEvent;
use super::value_objects::TeamName;

/// Separator between member names in the stored `Members` field
///
/// There is no escaping: member names must not contain a comma. The known
/// catalog has none, and [`Team`] refuses to add such a name.
pub const MEMBER_SEPARATOR: char = ',';

/// Team aggregate root
///
/// A named, ordered list of creature names chosen by the user.
///
/// # Invariants
/// - Name is not empty after trimming
/// - Members keep insertion order
/// - No member name appears twice (exact, case-sensitive comparison)
/// - No member name is empty or contains [`MEMBER_SEPARATOR`]
///
/// # Example
/// ```
/// use pokebuilder::domain::team::Team;
///
/// let (mut team, events) = Team::new(
///     "Alpha",
///     vec!["Pikachu".to_string(), "Eevee".to_string()],
/// ).expect("valid team");
///
/// assert_eq!(events.len(), 1);
/// assert!(team.add_member("Pikachu").is_none());
/// assert_eq!(team.members_field(), "Pikachu,Eevee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: TeamName,
    members: Vec<String>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - The team's name (cannot be empty)
    /// * `members` - Initial members; repeated names keep their first occurrence
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(String)` - If the name is empty or no usable member remains
    pub fn new(
        name: impl Into<String>,
        members: Vec<String>,
    ) -> Result<(Self, Vec<TeamEvent>), String> {
        let name = TeamName::new(name)?;

        let mut team = Self {
            name,
            members: Vec::with_capacity(members.len()),
        };
        for member in &members {
            team.push_member(member);
        }

        if team.members.is_empty() {
            return Err("Team must have at least one member".to_string());
        }

        let events = vec![TeamEvent::Created {
            team_name: team.name.to_string(),
            members: team.members.clone(),
        }];

        Ok((team, events))
    }

    /// Appends a member unless it is already present
    ///
    /// Returns `None` when nothing changed: the member already belongs to the
    /// team, or the name is empty or contains the separator.
    pub fn add_member(&mut self, member: &str) -> Option<TeamEvent> {
        let member = member.trim();
        if !self.push_member(member) {
            return None;
        }

        Some(TeamEvent::MemberAdded {
            team_name: self.name.to_string(),
            member: member.to_string(),
        })
    }

    /// Removes one occurrence of `member`
    ///
    /// Returns `None` when the member is not on the team.
    pub fn remove_member(&mut self, member: &str) -> Option<TeamEvent> {
        let position = self.members.iter().position(|m| m == member)?;
        let removed = self.members.remove(position);

        Some(TeamEvent::MemberRemoved {
            team_name: self.name.to_string(),
            member: removed,
        })
    }

    /// True when `member` is on the team (exact match)
    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Member names are stored trimmed, the same form `parse_members` reads back
    fn push_member(&mut self, member: &str) -> bool {
        let member = member.trim();
        if member.is_empty() || member.contains(MEMBER_SEPARATOR) || self.contains(member) {
            return false;
        }
        self.members.push(member.to_string());
        true
    }

    // ===== Getters =====

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Members joined for storage
    pub fn members_field(&self) -> String {
        self.members.join(MEMBER_SEPARATOR.to_string().as_str())
    }

    /// Splits a stored `Members` field
    ///
    /// Pieces are trimmed and empty pieces dropped, so `"A, B,"` yields
    /// `["A", "B"]` and an empty field yields no members.
    pub fn parse_members(field: &str) -> Vec<String> {
        field
            .split(MEMBER_SEPARATOR)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Reconstructs a Team from a stored row
    ///
    /// Bypasses validation: a hand-edited store may hold an empty name or
    /// repeated members, and those rows are kept as they are.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(name: String, members_field: &str) -> Self {
        Self {
            name: TeamName::from_persistence(name),
            members: Self::parse_members(members_field),
        }
    }
}
