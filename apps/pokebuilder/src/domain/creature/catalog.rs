use super::creature::Creature;
use std::collections::{BTreeSet, HashSet};

/// The read-only creature catalog
///
/// Holds every record in file order for the lifetime of the process. Loading
/// from disk lives with the CSV adapter (`CatalogStore::load`); this type only
/// answers questions about records it already has.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<Creature>,
}

impl CatalogStore {
    pub fn from_records(records: Vec<Creature>) -> Self {
        Self { records }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[Creature] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(Creature::name).collect()
    }

    /// First record with exactly this name
    pub fn find(&self, name: &str) -> Option<&Creature> {
        self.records.iter().find(|c| c.name() == name)
    }

    /// Every primary and secondary type, sorted ascending (case-sensitive)
    pub fn all_types(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|c| std::iter::once(c.type1()).chain(c.type2()))
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Records whose name is in `names`, in catalog order rather than input order
    pub fn names_by_list<S: AsRef<str>>(&self, names: &[S]) -> Vec<Creature> {
        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        self.records
            .iter()
            .filter(|c| wanted.contains(c.name()))
            .cloned()
            .collect()
    }
}
