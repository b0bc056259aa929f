// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swarm placement: spread overlapping points vertically around a baseline.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use demograph_core::{FeatureTable, SwarmPoint};
use kurbo::Point;

/// Tuning for the collision-avoidance scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmParams {
    /// Projected-x distance below which two points are considered overlapping.
    pub collision_threshold: f64,
    /// Vertical nudge applied per detected collision.
    pub step: f64,
    /// Symmetric saturation bound for the accumulated offset.
    pub max_offset: f64,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            collision_threshold: 1.0,
            step: 0.05,
            max_offset: 15.0,
        }
    }
}

impl SwarmParams {
    /// Sets the overlap distance in projected-x units.
    pub fn with_collision_threshold(mut self, collision_threshold: f64) -> Self {
        self.collision_threshold = collision_threshold;
        self
    }

    /// Sets the vertical nudge per collision.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the saturation bound.
    pub fn with_max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = max_offset;
        self
    }
}

/// Places every observation of every ordered feature around its row baseline.
///
/// Observations are processed in input order. Each one scans the points
/// already placed for the same feature and accumulates a vertical nudge per
/// overlap (projected x closer than `collision_threshold`), in a direction
/// that alternates per observation: the first pushes up, the second down, and
/// so on, regardless of whether any overlap was found. The scan returns early
/// once the accumulated offset saturates at `max_offset`, and the final
/// offset is clamped to that bound.
///
/// Features named in `order` but absent from `features` contribute no marks.
/// The engine never fails; non-finite values project to non-finite positions
/// and are the caller's to filter upstream. Output is deterministic for
/// identical input order.
///
/// Runtime is O(n²) in the observations of one feature, which is fine at the
/// cardinality of geographic sub-units this renders.
pub fn layout<PX, RY>(
    order: &[String],
    features: &FeatureTable,
    params: &SwarmParams,
    project_x: PX,
    row_center_y: RY,
) -> Vec<SwarmPoint>
where
    PX: Fn(f64) -> f64,
    RY: Fn(&str) -> f64,
{
    let mut out = Vec::new();
    for name in order {
        let Some(series) = features.get(name) else {
            continue;
        };
        let baseline = row_center_y(name);
        let mut placed_x: Vec<f64> = Vec::with_capacity(series.observations.len());
        let mut push_up = true;
        for (row, obs) in series.observations.iter().enumerate() {
            let x = project_x(obs.value);
            let mut y_offset = 0.0_f64;
            for &prev in &placed_x {
                if (x - prev).abs() < params.collision_threshold {
                    y_offset += if push_up { -params.step } else { params.step };
                }
                if y_offset.abs() >= params.max_offset {
                    break;
                }
            }
            push_up = !push_up;
            let y_offset = y_offset.clamp(-params.max_offset, params.max_offset);
            out.push(SwarmPoint {
                feature: series.name.clone(),
                row,
                value: obs.value,
                intensity: obs.intensity,
                pos: Point::new(x, baseline + y_offset),
            });
            placed_x.push(x);
        }
    }
    out
}
