//! Chart data
//!
//! Computes the series behind each chart (HP distribution, stat correlation
//! heatmap, per-type means, team bar and pie charts). Drawing them is left
//! to whoever consumes the output.

pub mod breakdown;
pub mod correlation;
pub mod histogram;

pub use breakdown::{
    bar_series, mean_by_type, share_breakdown, team_breakdown, BarPoint, Share, StatBreakdown,
    TypeMean,
};
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use histogram::{histogram, HistogramBin, DEFAULT_BINS};

use crate::domain::creature::{Creature, Stat};
use crate::query::TypeFilter;

/// Values of one stat in record order
pub fn stat_values(records: &[Creature], stat: Stat) -> Vec<u32> {
    records.iter().map(|c| c.stat(stat)).collect()
}

/// Records whose primary type passes `filter`
///
/// Catalog-wide charts restrict on the primary type only, unlike list
/// queries which also match the secondary type.
pub fn primary_type_subset(records: &[Creature], filter: &TypeFilter) -> Vec<Creature> {
    records
        .iter()
        .filter(|c| match filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => c.type1() == t,
        })
        .cloned()
        .collect()
}
