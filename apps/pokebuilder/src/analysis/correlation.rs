use serde::Serialize;

use crate::domain::creature::{Creature, Stat};

/// Pairwise Pearson correlation of the six stats
///
/// `values[i][j]` correlates `stats[i]` with `stats[j]`. A cell is `None`
/// when it is undefined: fewer than two records, or a stat without variance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub stats: Vec<Stat>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlation between two stats
    pub fn get(&self, a: Stat, b: Stat) -> Option<f64> {
        let i = self.stats.iter().position(|s| *s == a)?;
        let j = self.stats.iter().position(|s| *s == b)?;
        self.values[i][j]
    }
}

/// Builds the stat correlation matrix over `records`
pub fn correlation_matrix(records: &[Creature]) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = Stat::ALL
        .iter()
        .map(|stat| records.iter().map(|c| f64::from(c.stat(*stat))).collect())
        .collect();

    let values = columns
        .iter()
        .map(|xs| columns.iter().map(|ys| pearson(xs, ys)).collect())
        .collect();

    CorrelationMatrix {
        stats: Stat::ALL.to_vec(),
        values,
    }
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
