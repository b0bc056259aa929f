// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature ordering by mean absolute observation value.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use demograph_core::{FeatureTable, Observation};

/// Returns the arithmetic mean of `|value|` over the observations.
///
/// An empty sequence scores `0.0`. `NaN` values propagate into the score.
pub fn mean_abs(observations: &[Observation]) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }
    let sum: f64 = observations.iter().map(|o| o.value.abs()).sum();
    sum / observations.len() as f64
}

/// Orders feature names ascending by mean absolute value.
///
/// The ascending direction is the intended display order: lowest-impact
/// features come first and are drawn topmost. Ties keep their relative input
/// order (the sort is stable), and `NaN` scores order after every finite
/// score via [`f64::total_cmp`], so identical input always yields identical
/// output.
pub fn rank(features: &FeatureTable) -> Vec<String> {
    let mut keyed: Vec<(f64, &str)> = features
        .iter()
        .map(|s| (mean_abs(&s.observations), s.name.as_str()))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, name)| String::from(name)).collect()
}
