use serde::Serialize;

/// Bin count used for the HP distribution chart
pub const DEFAULT_BINS: usize = 30;

/// One equal-width histogram bin
///
/// Bins are half-open `[lower, upper)` except the last, which also holds
/// values equal to `upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Counts `values` into `bins` equal-width bins spanning their range
///
/// No values (or zero bins) gives no bins. When every value is the same
/// there is nothing to divide, so a single bin holds them all.
pub fn histogram(values: &[u32], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (min, max) = (f64::from(min), f64::from(max));
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &value in values {
        let index = ((f64::from(value) - min) / width) as usize;
        result[index.min(bins - 1)].count += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bins() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn constant_series_is_one_bin() {
        let bins = histogram(&[50, 50, 50], 30);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].lower, 50.0);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram(&[0, 5, 10], 2);

        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
        assert_eq!(bins[1].upper, 10.0);
    }

    #[test]
    fn counts_add_up_to_input_length() {
        let values: Vec<u32> = (1..=255).collect();
        let bins = histogram(&values, DEFAULT_BINS);

        assert_eq!(bins.len(), DEFAULT_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }
}
