// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience builder for the beeswarm (feature-impact) view.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use demograph_core::{FeatureTable, RecordData, SwarmPoint};
use demograph_transforms::{SwarmParams, layout, rank};

use crate::category::{CatalogError, Category, FieldCatalog};
use crate::project::observations;
use crate::scale::{ScaleBand, ScaleLinear, value_extent};

/// A minimal beeswarm chart builder.
///
/// This assembles the full pipeline: project a category into per-feature
/// observations, rank the features, lay each feature out on a band row, and
/// swarm the points along a shared linear x scale. The result is positioned
/// geometry; axes, the zero rule, and the intensity color ramp are the
/// renderer's job.
///
/// The x domain is always widened to include zero (impact values straddle
/// it) and padded a little so extreme points don't sit on the plot edge.
#[derive(Clone, Debug)]
pub struct BeeswarmChartSpec {
    /// Category projected into the feature rows.
    pub category: Category,
    /// Data rectangle in scene coordinates.
    pub plot: Rect,
    /// Collision-avoidance tuning.
    pub params: SwarmParams,
    /// Padding added on both ends of the inferred x domain, in data units.
    pub domain_pad: f64,
}

impl BeeswarmChartSpec {
    /// Creates a beeswarm spec with default layout tuning.
    pub fn new(category: Category, plot: Rect) -> Self {
        Self {
            category,
            plot,
            params: SwarmParams::default(),
            domain_pad: 0.01,
        }
    }

    /// Sets the collision-avoidance tuning.
    pub fn with_params(mut self, params: SwarmParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the domain padding.
    pub fn with_domain_pad(mut self, domain_pad: f64) -> Self {
        self.domain_pad = domain_pad;
        self
    }

    /// Returns the padded, zero-anchored x domain for a feature table.
    pub fn x_domain(&self, features: &FeatureTable) -> (f64, f64) {
        let (min, max) = value_extent(features).unwrap_or((0.0, 0.0));
        (min.min(0.0) - self.domain_pad, max.max(0.0) + self.domain_pad)
    }

    /// Returns x-axis tick values for a feature table.
    pub fn x_ticks(&self, features: &FeatureTable, count: usize) -> Vec<f64> {
        self.x_scale(features).ticks(count)
    }

    /// Projects the category and returns the display order of its features.
    pub fn order(
        &self,
        records: &dyn RecordData,
        catalog: &FieldCatalog,
    ) -> Result<Vec<String>, CatalogError> {
        Ok(rank(&observations(self.category, records, catalog)?))
    }

    /// Projects the category and lays out every observation.
    pub fn marks(
        &self,
        records: &dyn RecordData,
        catalog: &FieldCatalog,
    ) -> Result<Vec<SwarmPoint>, CatalogError> {
        Ok(self.marks_for(&observations(self.category, records, catalog)?))
    }

    /// Lays out a feature table the caller already projected.
    ///
    /// Useful when the observations come from somewhere other than the
    /// record catalog, e.g. precomputed model-impact scores keyed by
    /// feature.
    pub fn marks_for(&self, features: &FeatureTable) -> Vec<SwarmPoint> {
        let order = rank(features);
        let x = self.x_scale(features);
        let rows = ScaleBand::new((self.plot.y0, self.plot.y1), order.len());
        let row_index: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        layout(
            &order,
            features,
            &self.params,
            |v| x.map(v),
            |name| rows.center(row_index.get(name).copied().unwrap_or(0)),
        )
    }

    fn x_scale(&self, features: &FeatureTable) -> ScaleLinear {
        ScaleLinear::new(self.x_domain(features), (self.plot.x0, self.plot.x1))
    }
}
