// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection from raw records into transform inputs.
//!
//! Pure data shaping. The only failure mode is a catalog lookup; missing or
//! undefined record attributes always read as `0` so one malformed record
//! cannot take down a render pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use demograph_core::{FeatureTable, Observation, RecordData};

use crate::category::{CatalogError, Category, FieldCatalog};

/// Builds one observation series per configured field of a category.
///
/// Series are named by raw field key and keep catalog order, one observation
/// per record in row order. When the catalog pairs a field with an intensity
/// attribute, that attribute is carried on each observation; otherwise
/// intensity is `0`.
pub fn observations(
    category: Category,
    records: &dyn RecordData,
    catalog: &FieldCatalog,
) -> Result<FeatureTable, CatalogError> {
    let fields = catalog.per_field(category)?;
    let mut table = FeatureTable::new();
    for spec in fields {
        let mut series = Vec::with_capacity(records.row_count());
        for row in 0..records.row_count() {
            let value = records.f64(row, spec.field).unwrap_or(0.0);
            let intensity = spec
                .intensity_field
                .map_or(0.0, |field| records.f64(row, field).unwrap_or(0.0));
            series.push(Observation::new(value, intensity));
        }
        table.push(spec.field, series);
    }
    Ok(table)
}

/// Builds `(value, weight)` pairs for a weighted category, in row order.
pub fn weighted_pairs(
    category: Category,
    records: &dyn RecordData,
    catalog: &FieldCatalog,
) -> Result<Vec<(f64, f64)>, CatalogError> {
    let (value_field, weight_field) = catalog.weighted(category)?;
    Ok((0..records.row_count())
        .map(|row| {
            (
                records.f64(row, value_field).unwrap_or(0.0),
                records.f64(row, weight_field).unwrap_or(0.0),
            )
        })
        .collect())
}

/// Builds the labeled per-field values of one chosen record.
///
/// This is the bar-chart shape: each configured field of the category paired
/// with its display label and the selected record's value for it. An
/// out-of-range row reads as all zeros, like any other missing data.
pub fn record_bars(
    category: Category,
    records: &dyn RecordData,
    row: usize,
    catalog: &FieldCatalog,
) -> Result<Vec<(String, f64)>, CatalogError> {
    let fields = catalog.per_field(category)?;
    Ok(fields
        .iter()
        .map(|spec| {
            (
                String::from(spec.label),
                records.f64(row, spec.field).unwrap_or(0.0),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use demograph_core::RecordTable;

    use crate::category::{FieldGroup, FieldSpec};

    use super::*;

    fn gender_records() -> RecordTable {
        RecordTable::from_columns(
            vec!["gender_m".to_string(), "gender_f".to_string()],
            vec![vec![0.48, 0.51], vec![0.50, 0.47]],
        )
        .unwrap()
    }

    #[test]
    fn per_field_projection_keeps_catalog_and_row_order() {
        let catalog = FieldCatalog::voter_registration();
        let table = observations(Category::Gender, &gender_records(), &catalog).unwrap();
        assert_eq!(table.len(), 3);
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["gender_m", "gender_f", "gender_unknown"]);
        assert_eq!(table.get("gender_m").unwrap().observations[1].value, 0.51);
        // gender_unknown is absent from the records: zeros, not an error.
        assert!(
            table
                .get("gender_unknown")
                .unwrap()
                .observations
                .iter()
                .all(|o| o.value == 0.0)
        );
    }

    #[test]
    fn intensity_pairing_reads_the_secondary_field() {
        let records = RecordTable::from_columns(
            vec!["x_shap".to_string(), "x".to_string()],
            vec![vec![0.2, -0.4], vec![10.0, 30.0]],
        )
        .unwrap();
        let mut catalog = FieldCatalog::new();
        catalog.insert(
            Category::Party,
            FieldGroup::PerField(vec![
                FieldSpec::new("x_shap", "Impact").with_intensity("x"),
            ]),
        );
        let table = observations(Category::Party, &records, &catalog).unwrap();
        let series = table.get("x_shap").unwrap();
        assert_eq!(series.observations[0], Observation::new(0.2, 10.0));
        assert_eq!(series.observations[1], Observation::new(-0.4, 30.0));
    }

    #[test]
    fn weighted_pairs_read_value_and_weight_fields() {
        let records = RecordTable::from_columns(
            vec!["mean_hh_income".to_string(), "total_reg".to_string()],
            vec![vec![52_000.0, 87_500.0], vec![120.0, 340.0]],
        )
        .unwrap();
        let catalog = FieldCatalog::voter_registration();
        let pairs = weighted_pairs(Category::Income, &records, &catalog).unwrap();
        assert_eq!(pairs, vec![(52_000.0, 120.0), (87_500.0, 340.0)]);
    }

    #[test]
    fn record_bars_label_one_record() {
        let catalog = FieldCatalog::voter_registration();
        let bars = record_bars(Category::Gender, &gender_records(), 0, &catalog).unwrap();
        assert_eq!(bars[0], ("Male".to_string(), 0.48));
        assert_eq!(bars[1], ("Female".to_string(), 0.50));
        assert_eq!(bars[2], ("Unknown".to_string(), 0.0));
    }

    #[test]
    fn catalog_errors_pass_through() {
        let catalog = FieldCatalog::voter_registration();
        let records = gender_records();
        assert_eq!(
            observations(Category::Income, &records, &catalog).unwrap_err(),
            CatalogError::ExpectedPerField(Category::Income)
        );
        assert_eq!(
            weighted_pairs(Category::Age, &records, &catalog).unwrap_err(),
            CatalogError::ExpectedWeighted(Category::Age)
        );
    }
}
