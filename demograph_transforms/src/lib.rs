// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure data-to-geometry transforms for demographic charts.
//!
//! This crate provides the three algorithmic operators of the pipeline:
//! - [`rank()`]: order features by mean absolute observation value,
//! - [`layout`]: one-dimensional collision-avoidance ("swarm") placement
//!   around per-feature row baselines,
//! - [`weighted_bins`]: weighted histogram binning normalized to proportions.
//!
//! The operators are intentionally simple:
//! - they are pure functions over their inputs with no shared state, and
//! - malformed data never raises an error; it degrades to zero/empty results
//!   so a visualization keeps drawing (configuration problems are the chart
//!   layer's concern).

#![no_std]

extern crate alloc;

mod bin;
#[cfg(not(feature = "std"))]
mod float;
mod rank;
mod swarm;

pub use bin::weighted_bins;
pub use rank::{mean_abs, rank};
pub use swarm::{SwarmParams, layout};
