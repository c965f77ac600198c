use std::fmt;
use std::str::FromStr;

use crate::domain::creature::{Creature, Stat};

/// Word that disables the type and stat filters
pub const ALL: &str = "All";

/// Restricts results to one elemental type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    /// Matches when either type slot equals the name (case-sensitive)
    Only(String),
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL),
            TypeFilter::Only(t) => f.write_str(t),
        }
    }
}

/// Which stat the minimum threshold applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatFilter {
    #[default]
    All,
    Stat(Stat),
}

impl FromStr for StatFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(StatFilter::All)
        } else {
            s.parse().map(StatFilter::Stat)
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Ascending by name
    Name,
    /// Ascending by (type 1, type 2, name); a missing type 2 sorts last
    Type,
    /// Ascending by catalog number
    #[default]
    Number,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "type" => Ok(SortBy::Type),
            "number" | "#" => Ok(SortBy::Number),
            _ => Err(format!("Unknown sort key: {} (expected name, type or number)", s)),
        }
    }
}

/// Filter configuration for [`QueryEngine::query`](super::QueryEngine::query)
///
/// All filters are combined with AND. The default configuration matches
/// every record and keeps catalog order.
///
/// # Example
/// ```
/// use pokebuilder::domain::creature::Stat;
/// use pokebuilder::query::{QueryFilters, SortBy};
///
/// let filters = QueryFilters::default()
///     .with_name("char")
///     .with_type("Fire")
///     .with_min_stat(Stat::Attack, 80)
///     .sorted_by(SortBy::Name);
///
/// assert_eq!(filters.min_value, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFilters {
    /// Case-insensitive substring of the name; empty disables the filter
    pub name_contains: String,
    pub type_filter: TypeFilter,
    pub stat: StatFilter,
    /// Minimum value for `stat`; ignored while `stat` is `All`
    pub min_value: i64,
    pub sort_by: SortBy,
}

impl QueryFilters {
    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = needle.into();
        self
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.type_filter = TypeFilter::Only(type_name.to_string());
        self
    }

    pub fn with_min_stat(mut self, stat: Stat, min_value: i64) -> Self {
        self.stat = StatFilter::Stat(stat);
        self.min_value = min_value;
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when the record passes every filter
    pub fn matches(&self, creature: &Creature) -> bool {
        self.matches_name(creature) && self.matches_type(creature) && self.matches_stat(creature)
    }

    fn matches_name(&self, creature: &Creature) -> bool {
        self.name_contains.is_empty()
            || creature
                .name()
                .to_lowercase()
                .contains(&self.name_contains.to_lowercase())
    }

    fn matches_type(&self, creature: &Creature) -> bool {
        match &self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => creature.has_type(t),
        }
    }

    fn matches_stat(&self, creature: &Creature) -> bool {
        match self.stat {
            StatFilter::All => true,
            StatFilter::Stat(stat) => i64::from(creature.stat(stat)) >= self.min_value,
        }
    }
}
