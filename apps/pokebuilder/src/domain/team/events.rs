/// Domain events that occur within the Team aggregate
///
/// Every mutation of a team that actually changes something produces one
/// of these; no-op calls produce none. The repository logs them.
///
/// # Example
/// ```
/// use pokebuilder::domain::team::events::TeamEvent;
///
/// let event = TeamEvent::MemberAdded {
///     team_name: "Alpha".to_string(),
///     member: "Pikachu".to_string(),
/// };
/// assert_eq!(event.team_name(), "Alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team row is created
    Created {
        /// Name of the new team
        team_name: String,
        /// Initial members, in insertion order
        members: Vec<String>,
    },
    /// Fired when a member is appended
    MemberAdded {
        team_name: String,
        member: String,
    },
    /// Fired when a member is removed
    MemberRemoved {
        team_name: String,
        member: String,
    },
    /// Fired when a team row is deleted
    Deleted {
        team_name: String,
        /// Position the team held before deletion
        index: usize,
    },
}

impl TeamEvent {
    /// Returns the team name for this event
    pub fn team_name(&self) -> &str {
        match self {
            TeamEvent::Created { team_name, .. } => team_name,
            TeamEvent::MemberAdded { team_name, .. } => team_name,
            TeamEvent::MemberRemoved { team_name, .. } => team_name,
            TeamEvent::Deleted { team_name, .. } => team_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_created_event() {
        let event = TeamEvent::Created {
            team_name: "Alpha".to_string(),
            members: vec!["A".to_string()],
        };

        assert_eq!(event.team_name(), "Alpha");
    }

    #[test]
    fn member_removed_event() {
        let event = TeamEvent::MemberRemoved {
            team_name: "Beta".to_string(),
            member: "B".to_string(),
        };

        assert_eq!(event.team_name(), "Beta");
    }

    #[test]
    fn team_deleted_event() {
        let event = TeamEvent::Deleted {
            team_name: "Gamma".to_string(),
            index: 2,
        };

        assert_eq!(event.team_name(), "Gamma");
    }
}
