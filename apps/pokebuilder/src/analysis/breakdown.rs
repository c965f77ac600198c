use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::creature::{Creature, Stat};

/// Mean of a stat for one primary type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMean {
    pub type_name: String,
    pub mean: f64,
    pub count: usize,
}

/// One bar of a per-creature bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub value: u32,
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub name: String,
    pub value: u32,
    /// Percentage of the total, 0-100
    pub percent: f64,
}

/// Pie slices of one stat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBreakdown {
    pub stat: Stat,
    pub total: u32,
    pub shares: Vec<Share>,
}

/// Mean of `stat` grouped by primary type, sorted by type name
pub fn mean_by_type(records: &[Creature], stat: Stat) -> Vec<TypeMean> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for creature in records {
        let entry = groups.entry(creature.type1()).or_default();
        entry.0 += u64::from(creature.stat(stat));
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(type_name, (sum, count))| TypeMean {
            type_name: type_name.to_string(),
            mean: sum as f64 / count as f64,
            count,
        })
        .collect()
}

/// `(name, stat)` pairs in input order
pub fn bar_series(records: &[Creature], stat: Stat) -> Vec<BarPoint> {
    records
        .iter()
        .map(|c| BarPoint {
            name: c.name().to_string(),
            value: c.stat(stat),
        })
        .collect()
}

/// Each record's share of the stat total
///
/// Records with a zero value get no slice; a zero total gives no slices.
pub fn share_breakdown(records: &[Creature], stat: Stat) -> StatBreakdown {
    let total: u32 = records.iter().map(|c| c.stat(stat)).sum();
    let shares = if total == 0 {
        Vec::new()
    } else {
        records
            .iter()
            .filter(|c| c.stat(stat) > 0)
            .map(|c| Share {
                name: c.name().to_string(),
                value: c.stat(stat),
                percent: f64::from(c.stat(stat)) * 100.0 / f64::from(total),
            })
            .collect()
    };

    StatBreakdown { stat, total, shares }
}

/// Share breakdown for every stat, in column order
pub fn team_breakdown(records: &[Creature]) -> Vec<StatBreakdown> {
    Stat::ALL
        .iter()
        .map(|stat| share_breakdown(records, *stat))
        .collect()
}
