// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core data model for the demograph chart pipeline.
//!
//! This crate holds the types shared by the transform and chart layers:
//! - **Records**: an owned columnar table of named numeric attributes with
//!   stable row keys ([`RecordTable`]), plus the [`RecordData`] accessor trait
//!   external loaders can implement directly.
//! - **Features**: per-feature observation sequences ([`FeatureTable`]) as
//!   consumed by ranking and swarm layout.
//! - **Outputs**: positioned swarm marks and normalized histogram bins.
//!
//! Rendering is out of scope; downstream drawing layers consume these outputs
//! and map them to shapes.

#![no_std]

extern crate alloc;

mod feature;
mod output;
mod record;

pub use feature::{FeatureSeries, FeatureTable, Observation};
pub use output::{Bin, SwarmPoint, WeightedBin};
pub use record::{RecordData, RecordTable, RecordTableError};
