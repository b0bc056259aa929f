// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry outputs handed to the drawing layer.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;

/// A positioned swarm mark.
///
/// `pos.x` is the projected coordinate of [`SwarmPoint::value`]; `pos.y` is
/// the feature's row baseline plus the collision-avoidance offset. Within one
/// feature, marks closer than the configured step vertically are only
/// produced when both offsets have saturated at the configured bound.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmPoint {
    /// Feature this mark belongs to.
    pub feature: String,
    /// Observation index within the feature (input order, stable identity).
    pub row: usize,
    /// Raw value the x coordinate was projected from.
    pub value: f64,
    /// Intensity attribute for the external color scale.
    pub intensity: f64,
    /// Final mark position in scene coordinates.
    pub pos: Point,
}

/// One weighted histogram bucket before label formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedBin {
    /// Upper edge of the bucket in data units.
    pub upper: f64,
    /// Share of total weight that landed in this bucket, in `[0, 1]`.
    pub proportion: f64,
}

/// A labeled histogram bin as consumed by the bar renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Display label (a formatted upper-edge value).
    pub label: String,
    /// Share of total weight, in `[0, 1]`.
    pub proportion: f64,
}
