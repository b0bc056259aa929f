// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience builder for the weighted histogram view.

extern crate alloc;

use alloc::vec::Vec;

use demograph_core::{Bin, RecordData};
use demograph_transforms::weighted_bins;

use crate::category::{CatalogError, Category, FieldCatalog};
use crate::format::BinLabel;
use crate::project::weighted_pairs;

/// A minimal weighted-histogram chart builder.
///
/// This is a small convenience wrapper around:
/// - [`weighted_pairs`] for the category's `(value, weight)` projection, and
/// - [`weighted_bins`] plus a [`BinLabel`] to produce labeled proportions.
///
/// Defaults match the household-income view: $10,000 buckets with `$N,000`
/// labels.
#[derive(Clone, Copy, Debug)]
pub struct HistogramChartSpec {
    /// Category to bin; must use the weighted shape in the catalog.
    pub category: Category,
    /// Bucket width in data units.
    pub bin_width: f64,
    /// Upper-edge label format.
    pub label: BinLabel,
}

impl HistogramChartSpec {
    /// Creates a histogram spec with income-view defaults.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            bin_width: 10_000.0,
            label: BinLabel::DollarsThousands,
        }
    }

    /// Sets the bucket width.
    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        self.bin_width = bin_width;
        self
    }

    /// Sets the label format.
    pub fn with_label(mut self, label: BinLabel) -> Self {
        self.label = label;
        self
    }

    /// Projects, bins, and labels the records.
    ///
    /// Proportions sum to 1 whenever the records carry positive total
    /// weight; an empty dataset yields no bins.
    pub fn bins(
        &self,
        records: &dyn RecordData,
        catalog: &FieldCatalog,
    ) -> Result<Vec<Bin>, CatalogError> {
        let pairs = weighted_pairs(self.category, records, catalog)?;
        Ok(self.label.apply(&weighted_bins(&pairs, self.bin_width)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use demograph_core::RecordTable;

    use super::*;

    #[test]
    fn income_defaults_produce_dollar_labels() {
        let records = RecordTable::from_columns(
            vec!["mean_hh_income".to_string(), "total_reg".to_string()],
            vec![vec![52_000.0, 67_500.0], vec![100.0, 300.0]],
        )
        .unwrap();
        let catalog = FieldCatalog::voter_registration();
        let bins = HistogramChartSpec::new(Category::Income)
            .bins(&records, &catalog)
            .unwrap();
        // Snapped bounds [50k, 70k): buckets ending at $60,000 and $70,000.
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].label, "$60,000");
        assert_eq!(bins[1].label, "$70,000");
        assert!((bins[0].proportion - 0.25).abs() < 1e-9);
        assert!((bins[1].proportion - 0.75).abs() < 1e-9);
    }

    #[test]
    fn per_field_category_is_rejected() {
        let records = RecordTable::from_columns(
            vec!["gender_m".to_string()],
            vec![vec![0.5]],
        )
        .unwrap();
        let catalog = FieldCatalog::voter_registration();
        let err = HistogramChartSpec::new(Category::Gender)
            .bins(&records, &catalog)
            .unwrap_err();
        assert_eq!(err, CatalogError::ExpectedWeighted(Category::Gender));
    }
}
