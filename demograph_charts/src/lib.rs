// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks over the demograph transforms.
//!
//! This crate is the glue between raw voter-registration records and the
//! algorithmic operators in `demograph_transforms`:
//! - **Categories** are a closed enum; each carries an explicit field table
//!   (never an ambient global) describing which record attributes feed which
//!   chart.
//! - **Projection** shapes records into the inputs the transforms consume.
//! - **Scales** map data values into scene coordinates and build the
//!   projection closures the swarm layout expects.
//! - **Chart specs** assemble full pipelines (beeswarm, weighted histogram,
//!   density traces) and hand positioned geometry to an external renderer.
//!
//! Drawing, axes, and color-scale selection stay out of scope; everything
//! here produces data for those collaborators.

#![no_std]

extern crate alloc;

mod beeswarm_chart;
mod category;
#[cfg(test)]
mod chart_tests;
mod density_chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod histogram_chart;
mod project;
mod scale;

pub use beeswarm_chart::BeeswarmChartSpec;
pub use category::{CatalogError, Category, FieldCatalog, FieldGroup, FieldSpec};
pub use density_chart::{CategoryTraces, DensityChartSpec, TraceSpec};
pub use format::BinLabel;
pub use histogram_chart::HistogramChartSpec;
pub use project::{observations, record_bars, weighted_pairs};
pub use scale::{ScaleBand, ScaleLinear, intensity_extent, value_extent};
