use std::cmp::Ordering;

use super::filters::{QueryFilters, SortBy};
use crate::domain::creature::{CatalogStore, Creature};

/// Stateless filter and sort over the catalog
///
/// Queries never touch the catalog; they return copies of the matching
/// records. An empty result is a normal outcome.
pub struct QueryEngine;

impl QueryEngine {
    /// Returns the records passing `filters`, ordered by `filters.sort_by`
    ///
    /// Sorting is stable, so records with equal keys keep catalog order.
    pub fn query(catalog: &CatalogStore, filters: &QueryFilters) -> Vec<Creature> {
        let mut results: Vec<Creature> = catalog
            .records()
            .iter()
            .filter(|c| filters.matches(c))
            .cloned()
            .collect();

        results.sort_by(|a, b| Self::compare(filters.sort_by, a, b));

        tracing::debug!(
            matched = results.len(),
            total = catalog.len(),
            sort = ?filters.sort_by,
            "Catalog query"
        );
        results
    }

    fn compare(sort_by: SortBy, a: &Creature, b: &Creature) -> Ordering {
        match sort_by {
            SortBy::Name => a.name().cmp(b.name()),
            SortBy::Type => a
                .type1()
                .cmp(b.type1())
                .then_with(|| compare_secondary(a.type2(), b.type2()))
                .then_with(|| a.name().cmp(b.name())),
            SortBy::Number => a.number().cmp(&b.number()),
        }
    }
}

// Missing secondary types go after present ones
fn compare_secondary(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::creature::{BaseStats, Stat};
    use crate::query::filters::{StatFilter, TypeFilter};
    use std::collections::HashSet;

    fn creature(number: u32, name: &str, type1: &str, type2: Option<&str>, hp: u32) -> Creature {
        Creature::new(
            number,
            name,
            type1,
            type2.map(str::to_string),
            BaseStats {
                hp,
                attack: hp + 10,
                ..Default::default()
            },
        )
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_records(vec![
            creature(6, "Charizard", "Fire", Some("Flying"), 78),
            creature(1, "Bulbasaur", "Grass", Some("Poison"), 45),
            creature(4, "Charmander", "Fire", None, 39),
            creature(7, "Squirtle", "Water", None, 44),
            creature(130, "Gyarados", "Water", Some("Flying"), 95),
            creature(5, "Charmeleon", "Fire", None, 58),
        ])
    }

    fn names(results: &[Creature]) -> Vec<&str> {
        results.iter().map(Creature::name).collect()
    }

    #[test]
    fn single_record_type_scenario() {
        let store = CatalogStore::from_records(vec![creature(25, "Pika", "Electric", None, 35)]);

        let electric = QueryEngine::query(&store, &QueryFilters::default().with_type("Electric"));
        let water = QueryEngine::query(&store, &QueryFilters::default().with_type("Water"));

        assert_eq!(names(&electric), vec!["Pika"]);
        assert!(water.is_empty());
    }

    #[test]
    fn type_filter_matches_secondary_type() {
        let results = QueryEngine::query(&catalog(), &QueryFilters::default().with_type("Flying"));
        assert_eq!(names(&results), vec!["Charizard", "Gyarados"]);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let results = QueryEngine::query(&catalog(), &QueryFilters::default().with_name("CHAR"));
        assert_eq!(names(&results), vec!["Charmander", "Charmeleon", "Charizard"]);
    }

    #[test]
    fn stat_threshold_is_inclusive() {
        let filters = QueryFilters::default().with_min_stat(Stat::Hp, 58);
        let results = QueryEngine::query(&catalog(), &filters);
        assert_eq!(names(&results), vec!["Charmeleon", "Charizard", "Gyarados"]);
    }

    #[test]
    fn min_value_ignored_without_stat() {
        let filters = QueryFilters {
            min_value: 1_000,
            ..Default::default()
        };
        assert_eq!(QueryEngine::query(&catalog(), &filters).len(), 6);
    }

    #[test]
    fn sort_by_name() {
        let filters = QueryFilters::default().sorted_by(SortBy::Name);
        let results = QueryEngine::query(&catalog(), &filters);
        assert_eq!(
            names(&results),
            vec!["Bulbasaur", "Charizard", "Charmander", "Charmeleon", "Gyarados", "Squirtle"]
        );
    }

    #[test]
    fn sort_by_type_puts_missing_secondary_last() {
        let filters = QueryFilters::default().sorted_by(SortBy::Type);
        let results = QueryEngine::query(&catalog(), &filters);
        assert_eq!(
            names(&results),
            vec!["Charizard", "Charmander", "Charmeleon", "Bulbasaur", "Gyarados", "Squirtle"]
        );
    }

    #[test]
    fn sort_by_number() {
        let results = QueryEngine::query(&catalog(), &QueryFilters::default());
        let numbers: Vec<u32> = results.iter().map(Creature::number).collect();
        assert_eq!(numbers, vec![1, 4, 5, 6, 7, 130]);
    }

    #[test]
    fn results_are_distinct_subset_and_shrink_with_more_filters() {
        let store = catalog();
        let steps = [
            QueryFilters::default(),
            QueryFilters::default().with_name("a"),
            QueryFilters::default().with_name("a").with_type("Fire"),
            QueryFilters::default()
                .with_name("a")
                .with_type("Fire")
                .with_min_stat(Stat::Attack, 60),
        ];

        let mut previous = usize::MAX;
        for filters in &steps {
            let results = QueryEngine::query(&store, filters);
            let unique: HashSet<u32> = results.iter().map(Creature::number).collect();

            assert_eq!(unique.len(), results.len());
            assert!(results.iter().all(|c| store.records().contains(c)));
            assert!(results.len() <= previous);
            previous = results.len();
        }
    }

    #[test]
    fn query_does_not_touch_catalog() {
        let store = catalog();
        let before = store.records().to_vec();

        let filters = QueryFilters {
            name_contains: "s".to_string(),
            type_filter: TypeFilter::All,
            stat: StatFilter::All,
            min_value: 0,
            sort_by: SortBy::Name,
        };
        QueryEngine::query(&store, &filters);

        assert_eq!(store.records(), &before[..]);
    }
}
