// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace configuration and point shaping for the density-contour view.
//!
//! Contour estimation itself is an external collaborator (points in,
//! polygons out); this module produces its input point clouds and carries
//! the per-category trace/axis configuration.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use peniko::Color;
use smallvec::SmallVec;

use demograph_core::RecordData;

use crate::category::{CatalogError, Category};

/// One density trace: a group share on x against the shared y field.
///
/// Multi-field traces sum their fields per record, collapsing adjacent
/// brackets (e.g. ages 18-19 and 20-24) into one curve.
#[derive(Debug, Clone)]
pub struct TraceSpec {
    /// Record fields summed into the trace's x value.
    pub fields: SmallVec<[&'static str; 4]>,
    /// Legend label.
    pub label: &'static str,
    /// Configured stroke color.
    pub color: Color,
}

impl TraceSpec {
    /// Creates a trace over the given fields.
    pub fn new(label: &'static str, color: Color, fields: &[&'static str]) -> Self {
        Self {
            fields: SmallVec::from_slice(fields),
            label,
            color,
        }
    }
}

/// A category's traces plus the axis domains the view pins for it.
#[derive(Debug, Clone)]
pub struct CategoryTraces {
    /// Traces in legend order.
    pub traces: Vec<TraceSpec>,
    /// Fixed x domain (group-share ratio).
    pub x_domain: (f64, f64),
    /// Fixed y domain (turnout ratio).
    pub y_domain: (f64, f64),
}

/// Density-view configuration: a y field shared by every trace, and one
/// trace table per category.
#[derive(Debug, Clone)]
pub struct DensityChartSpec {
    /// Record field providing every trace's y value.
    pub y_field: &'static str,
    tables: HashMap<Category, CategoryTraces>,
}

impl DensityChartSpec {
    /// Creates an empty spec over the given y field.
    pub fn new(y_field: &'static str) -> Self {
        Self {
            y_field,
            tables: HashMap::new(),
        }
    }

    /// Inserts or replaces a category's trace table.
    pub fn insert(&mut self, category: Category, traces: CategoryTraces) {
        self.tables.insert(category, traces);
    }

    /// Returns the trace table for a category.
    pub fn category(&self, category: Category) -> Result<&CategoryTraces, CatalogError> {
        self.tables
            .get(&category)
            .ok_or(CatalogError::UnknownCategory(category))
    }

    /// Builds one trace's point cloud, in row order.
    ///
    /// x is the sum of the trace's fields for the record, y is the shared
    /// field; missing attributes read as `0` either way.
    pub fn points(&self, records: &dyn RecordData, trace: &TraceSpec) -> Vec<Point> {
        (0..records.row_count())
            .map(|row| {
                let x: f64 = trace
                    .fields
                    .iter()
                    .map(|field| records.f64(row, field).unwrap_or(0.0))
                    .sum();
                let y = records.f64(row, self.y_field).unwrap_or(0.0);
                Point::new(x, y)
            })
            .collect()
    }

    /// The voter-turnout density view: group-share traces per category
    /// against 2020 turnout, with the axis windows the view pins per
    /// category. Income has no density view and stays out of the table.
    pub fn voter_traces() -> Self {
        let mut spec = Self::new("2020_turnout_pct");
        spec.insert(
            Category::Gender,
            CategoryTraces {
                traces: alloc::vec![
                    TraceSpec::new("Male", Color::from_rgb8(0x4c, 0x90, 0xf0), &["gender_m"]),
                    TraceSpec::new("Female", Color::from_rgb8(0xd3, 0x3d, 0x17), &["gender_f"]),
                ],
                x_domain: (0.4, 0.6),
                y_domain: (0.5, 1.0),
            },
        );
        spec.insert(
            Category::Party,
            CategoryTraces {
                traces: alloc::vec![
                    TraceSpec::new(
                        "Republican",
                        Color::from_rgb8(0xd3, 0x3d, 0x17),
                        &["party_rep"],
                    ),
                    TraceSpec::new(
                        "Democrat",
                        Color::from_rgb8(0x2d, 0x72, 0xd2),
                        &["party_dem"],
                    ),
                    TraceSpec::new(
                        "Non-Partisan",
                        Color::from_rgb8(0x32, 0xa4, 0x67),
                        &["party_npp"],
                    ),
                ],
                x_domain: (-0.05, 0.75),
                y_domain: (0.4, 1.0),
            },
        );
        spec.insert(
            Category::Ethnicity,
            CategoryTraces {
                traces: alloc::vec![
                    TraceSpec::new(
                        "European",
                        Color::from_rgb8(0x3f, 0xa6, 0xda),
                        &["eth1_eur"],
                    ),
                    TraceSpec::new(
                        "East and South Asian",
                        Color::from_rgb8(0x62, 0xd9, 0x6b),
                        &["eth1_esa"],
                    ),
                    TraceSpec::new(
                        "Hispanic and Portuguese",
                        Color::from_rgb8(0xf0, 0xb7, 0x26),
                        &["eth1_hisp"],
                    ),
                    TraceSpec::new(
                        "African-American",
                        Color::from_rgb8(0xd3, 0x3d, 0x17),
                        &["eth1_aa"],
                    ),
                ],
                x_domain: (-0.1, 0.95),
                y_domain: (0.5, 1.0),
            },
        );
        spec.insert(
            Category::Age,
            CategoryTraces {
                traces: alloc::vec![
                    TraceSpec::new(
                        "Ages 18-24",
                        Color::from_rgb8(0xd3, 0x3d, 0x17),
                        &["age_18_19", "age_20_24"],
                    ),
                    TraceSpec::new(
                        "Ages 25-34",
                        Color::from_rgb8(0x14, 0x7e, 0xb3),
                        &["age_25_29", "age_30_34"],
                    ),
                    TraceSpec::new(
                        "Ages 35-64",
                        Color::from_rgb8(0xf0, 0xb7, 0x26),
                        &["age_35_44", "age_45_54", "age_55_64"],
                    ),
                    TraceSpec::new(
                        "Ages 65-85+",
                        Color::from_rgb8(0x43, 0xbf, 0x4d),
                        &["age_65_74", "age_75_84", "age_85over"],
                    ),
                ],
                x_domain: (0.0, 0.6),
                y_domain: (0.4, 1.0),
            },
        );
        spec.insert(
            Category::Language,
            CategoryTraces {
                traces: alloc::vec![
                    TraceSpec::new(
                        "English",
                        Color::from_rgb8(0x3f, 0xa6, 0xda),
                        &["lang_english"],
                    ),
                    TraceSpec::new(
                        "Chinese and Vietnamese",
                        Color::from_rgb8(0xd3, 0x3d, 0x17),
                        &["lang_chinese", "lang_vietnamese"],
                    ),
                    TraceSpec::new(
                        "Italian",
                        Color::from_rgb8(0x62, 0xd9, 0x6b),
                        &["lang_italian"],
                    ),
                    TraceSpec::new(
                        "Spanish and Portuguese",
                        Color::from_rgb8(0xf0, 0xb7, 0x26),
                        &["lang_spanish", "lang_portuguese"],
                    ),
                    TraceSpec::new(
                        "Unknown",
                        Color::from_rgb8(0x9d, 0x3f, 0x9d),
                        &["lang_unknown"],
                    ),
                ],
                x_domain: (-0.05, 0.75),
                y_domain: (0.5, 1.0),
            },
        );
        spec
    }
}
