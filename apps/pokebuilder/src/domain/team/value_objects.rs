use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a saved team
///
/// The name is stored exactly as the user typed it; comparisons go through
/// [`TeamName::matches`], which trims surrounding whitespace and ignores case.
///
/// # Invariants
/// - Not empty after trimming
/// - Immutable after construction
///
/// # Example
/// ```
/// use pokebuilder::domain::team::TeamName;
///
/// let name = TeamName::new("Alpha").expect("valid name");
/// assert!(name.matches("  alpha "));
/// assert_eq!(name.as_str(), "Alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the name has visible characters
    /// * `Err(String)` - If the name is empty or whitespace only
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        Ok(TeamName(name))
    }

    /// Wraps a name read back from the store without validation
    pub(crate) fn from_persistence(name: String) -> Self {
        TeamName(name)
    }

    /// Normalized comparison key: trimmed and lowercased
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// True when `other` names the same team, ignoring case and surrounding whitespace
    pub fn matches(&self, other: &str) -> bool {
        Self::normalize(&self.0) == Self::normalize(other)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
