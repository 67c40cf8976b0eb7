//! Descriptive statistics over observation sequences.
//!
//! Every function here takes a possibly empty slice and returns `None`
//! for empty input, so callers cannot aggregate nothing by accident.

/// Mean, median and range of floating-point observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Mean and median of integer counts, with an exact integer range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountSummary {
    pub mean: f64,
    pub median: f64,
    pub min: u64,
    pub max: u64,
}

/// Summarize floating-point observations (seconds)
///
/// **Public** - used for the scheduler timing fields
pub fn summarize_f64(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(Summary {
        mean: exact_sum(&sorted) / sorted.len() as f64,
        median: median_of_sorted(&sorted),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Summarize integer counts
///
/// **Public** - used for hypercall, ptwr and privop counts
pub fn summarize_u64(values: &[u64]) -> Option<CountSummary> {
    let min = *values.iter().min()?;
    let max = *values.iter().max()?;

    let as_float: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let summary = summarize_f64(&as_float)?;

    Some(CountSummary {
        mean: summary.mean,
        median: summary.median,
        min,
        max,
    })
}

/// Median of an already sorted, non-empty slice
///
/// **Private** - even-length input averages the two middle values
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Correctly rounded sum of finite values
///
/// **Private** - Shewchuk's exact partials, rounded once at the end with
/// round-half-even. A running `+=` drifts enough to flip the second
/// decimal of a mean.
fn exact_sum(values: &[f64]) -> f64 {
    let mut partials: Vec<f64> = Vec::new();

    for &value in values {
        let mut x = value;
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }

    let Some(mut hi) = partials.pop() else {
        return 0.0;
    };
    let mut lo = 0.0;
    while let Some(y) = partials.pop() {
        let x = hi;
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }

    // Half-way case: the remaining partials decide the rounding direction
    if let Some(&next) = partials.last() {
        if (lo < 0.0 && next < 0.0) || (lo > 0.0 && next > 0.0) {
            let y = lo * 2.0;
            let x = hi + y;
            if y == x - hi {
                hi = x;
            }
        }
    }

    hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize_f64(&[]), None);
        assert_eq!(summarize_u64(&[]), None);
    }

    #[test]
    fn test_summarize_single() {
        let summary = summarize_f64(&[2.0]).unwrap();
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 2.0);
    }

    #[test]
    fn test_summarize_odd_length_unsorted() {
        let summary = summarize_f64(&[3.0, 1.0, 8.0]).unwrap();
        assert_eq!(summary.mean, 4.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 8.0);
    }

    #[test]
    fn test_summarize_even_length_median() {
        let summary = summarize_f64(&[4.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.mean, 2.5);
    }

    #[test]
    fn test_mean_is_rounded_once() {
        // A running sum over these lands on 3.8550000000000004
        let summary = summarize_f64(&[2.97, 1.97, 0.85, 2.51, 4.91, 9.92]).unwrap();
        assert_eq!(summary.mean, 3.855);
        assert_eq!(format!("{:.2}", summary.mean), "3.85");
    }

    #[test]
    fn test_exact_sum() {
        assert_eq!(exact_sum(&[]), 0.0);
        assert_eq!(exact_sum(&[0.1; 10]), 1.0);
        assert_eq!(exact_sum(&[1e16, 1.0, -1e16]), 1.0);
    }

    #[test]
    fn test_summarize_u64_keeps_integer_range() {
        let summary = summarize_u64(&[10, 4, 7, 1]).unwrap();
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 10);
        assert_eq!(summary.median, 5.5);
        assert_eq!(summary.mean, 5.5);
    }
}
