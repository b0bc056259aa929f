// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weighted histogram binning normalized to proportions.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use demograph_core::WeightedBin;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Bins `(value, weight)` pairs into fixed-width buckets and normalizes the
/// accumulated weights to proportions.
///
/// Bounds are snapped outward to multiples of `bin_width`, so the first
/// bucket starts at `floor(min / bin_width) * bin_width` and the last ends at
/// `ceil(max / bin_width) * bin_width`. A value exactly on the upper bound is
/// counted in the last bucket rather than falling out of range. At least one
/// bucket is produced even when every value is identical.
///
/// Proportions divide by the total weight and sum to 1 for any input with
/// positive total weight; when the total weight is 0 every proportion stays
/// 0. Pairs with a non-finite value or weight are skipped. An empty input
/// (or one with no finite values) yields no buckets, as does a non-positive
/// or non-finite `bin_width`.
pub fn weighted_bins(pairs: &[(f64, f64)], bin_width: f64) -> Vec<WeightedBin> {
    if pairs.is_empty() || !(bin_width.is_finite() && bin_width > 0.0) {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(value, _) in pairs {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let lower = (min / bin_width).floor() * bin_width;
    let upper = (max / bin_width).ceil() * bin_width;
    let count_f = ((upper - lower) / bin_width).ceil().max(1.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite bounds and a positive width keep the bucket count small"
    )]
    let count = count_f as usize;

    let mut accumulated = vec![0.0_f64; count];
    let mut total = 0.0;
    for &(value, weight) in pairs {
        if !value.is_finite() || !weight.is_finite() {
            continue;
        }
        let index = if value == upper {
            count - 1
        } else {
            let slot = ((value - lower) / bin_width).floor();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "value lies within the snapped bounds, so the slot fits in the bucket count"
            )]
            {
                (slot as usize).min(count - 1)
            }
        };
        accumulated[index] += weight;
        total += weight;
    }

    accumulated
        .iter()
        .enumerate()
        .map(|(i, &weight)| WeightedBin {
            upper: lower + (i + 1) as f64 * bin_width,
            proportion: if total == 0.0 { 0.0 } else { weight / total },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(weighted_bins(&[], 10.0).is_empty());
    }

    #[test]
    fn proportions_sum_to_one() {
        let pairs = [(12.0, 2.0), (27.0, 1.0), (44.0, 5.0), (12.5, 3.5)];
        let bins = weighted_bins(&pairs, 10.0);
        let sum: f64 = bins.iter().map(|b| b.proportion).sum();
        assert!((sum - 1.0).abs() < EPS, "sum was {sum}");
    }

    #[test]
    fn bounds_snap_outward_to_bin_multiples() {
        let bins = weighted_bins(&[(12.0, 1.0), (27.0, 1.0)], 10.0);
        // 12 and 27 snap to [10, 30): two buckets ending at 20 and 30.
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].upper, 20.0);
        assert_eq!(bins[1].upper, 30.0);
        assert!((bins[0].proportion - 0.5).abs() < EPS);
        assert!((bins[1].proportion - 0.5).abs() < EPS);
    }

    #[test]
    fn value_on_the_upper_bound_lands_in_the_last_bucket() {
        let pairs = [(0.0, 1.0), (100.0, 1.0)];
        let bins = weighted_bins(&pairs, 10.0);
        assert_eq!(bins.len(), 10);
        assert!((bins[9].proportion - 0.5).abs() < EPS);
        let sum: f64 = bins.iter().map(|b| b.proportion).sum();
        assert!((sum - 1.0).abs() < EPS, "sum was {sum}");
    }

    #[test]
    fn identical_values_produce_a_single_bucket() {
        let bins = weighted_bins(&[(40.0, 1.0), (40.0, 3.0)], 10.0);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].upper, 50.0);
        assert!((bins[0].proportion - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_total_weight_leaves_proportions_at_zero() {
        let bins = weighted_bins(&[(5.0, 0.0), (15.0, 0.0)], 10.0);
        assert_eq!(bins.len(), 2);
        assert!(bins.iter().all(|b| b.proportion == 0.0));
    }

    #[test]
    fn non_finite_pairs_are_skipped() {
        let pairs = [(f64::NAN, 1.0), (10.0, f64::INFINITY), (10.0, 1.0)];
        let bins = weighted_bins(&pairs, 10.0);
        let sum: f64 = bins.iter().map(|b| b.proportion).sum();
        assert!((sum - 1.0).abs() < EPS, "sum was {sum}");
    }

    #[test]
    fn all_nan_values_yield_no_buckets() {
        assert!(weighted_bins(&[(f64::NAN, 1.0)], 10.0).is_empty());
    }

    #[test]
    fn negative_values_bin_below_zero() {
        let bins = weighted_bins(&[(-25.0, 1.0), (5.0, 1.0)], 10.0);
        // Snapped bounds are [-30, 10): four buckets.
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].upper, -20.0);
        assert!((bins[0].proportion - 0.5).abs() < EPS);
        assert!((bins[3].proportion - 0.5).abs() < EPS);
    }
}
