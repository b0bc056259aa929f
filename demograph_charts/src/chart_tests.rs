// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use demograph_core::{RecordData, RecordTable};

use crate::{
    BeeswarmChartSpec, BinLabel, CatalogError, Category, FieldCatalog, FieldGroup, FieldSpec,
    HistogramChartSpec,
};

fn weighted_catalog(value_field: &'static str, weight_field: &'static str) -> FieldCatalog {
    let mut catalog = FieldCatalog::new();
    catalog.insert(
        Category::Income,
        FieldGroup::Weighted {
            value_field,
            weight_field,
        },
    );
    catalog
}

#[test]
fn histogram_end_to_end_matches_hand_computed_proportions() {
    // Three records binned on `a`, weighted by `b`, width 50: four of five
    // weight units land in [0, 50), one in [50, 100].
    let records = RecordTable::from_columns(
        vec!["a".to_string(), "b".to_string()],
        vec![vec![10.0, 20.0, 100.0], vec![1.0, 3.0, 1.0]],
    )
    .unwrap();
    let catalog = weighted_catalog("a", "b");

    let bins = HistogramChartSpec::new(Category::Income)
        .with_bin_width(50.0)
        .with_label(BinLabel::Upper { decimals: 0 })
        .bins(&records, &catalog)
        .unwrap();

    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].label, "50");
    assert!((bins[0].proportion - 0.8).abs() < 1e-9);
    assert_eq!(bins[1].label, "100");
    assert!((bins[1].proportion - 0.2).abs() < 1e-9);
}

#[test]
fn histogram_of_empty_records_has_no_bins() {
    let records =
        RecordTable::from_columns(vec!["a".to_string(), "b".to_string()], vec![vec![], vec![]])
            .unwrap();
    let catalog = weighted_catalog("a", "b");
    let bins = HistogramChartSpec::new(Category::Income)
        .bins(&records, &catalog)
        .unwrap();
    assert!(bins.is_empty());
}

#[test]
fn beeswarm_pipeline_orders_rows_and_respects_the_collision_band() {
    // Forty block groups with near-identical shares per field force the
    // swarm to fan points out around each row baseline.
    let rows = 40;
    let gender_m: Vec<f64> = (0..rows).map(|i| 0.5 + i as f64 * 1e-5).collect();
    let gender_f: Vec<f64> = (0..rows).map(|i| 0.001 + i as f64 * 1e-5).collect();
    let gender_unknown = vec![0.0; rows];
    let records = RecordTable::from_columns(
        vec![
            "gender_m".to_string(),
            "gender_f".to_string(),
            "gender_unknown".to_string(),
        ],
        vec![gender_m, gender_f, gender_unknown],
    )
    .unwrap();
    let catalog = FieldCatalog::voter_registration();
    let spec = BeeswarmChartSpec::new(Category::Gender, Rect::new(0.0, 0.0, 400.0, 300.0));

    let order = spec.order(&records, &catalog).unwrap();
    assert_eq!(order, vec!["gender_unknown", "gender_f", "gender_m"]);

    let marks = spec.marks(&records, &catalog).unwrap();
    assert_eq!(marks.len(), records.row_count() * 3);

    // Marks of one feature never overlap unless both offsets saturated.
    for (i, a) in marks.iter().enumerate() {
        for b in marks[i + 1..].iter().filter(|b| b.feature == a.feature) {
            let dx = (a.pos.x - b.pos.x).abs();
            let dy = (a.pos.y - b.pos.y).abs();
            assert!(
                dx >= spec.params.collision_threshold || dy >= spec.params.step - 1e-9,
                "overlap between {} rows {} and {}",
                a.feature,
                a.row,
                b.row
            );
        }
    }
}

#[test]
fn beeswarm_and_histogram_views_disagree_on_category_shape() {
    let records =
        RecordTable::from_columns(vec!["gender_m".to_string()], vec![vec![0.5]]).unwrap();
    let catalog = FieldCatalog::voter_registration();

    let swarm_err = BeeswarmChartSpec::new(Category::Income, Rect::new(0.0, 0.0, 10.0, 10.0))
        .marks(&records, &catalog)
        .unwrap_err();
    assert_eq!(swarm_err, CatalogError::ExpectedPerField(Category::Income));

    let histogram_err = HistogramChartSpec::new(Category::Gender)
        .bins(&records, &catalog)
        .unwrap_err();
    assert_eq!(histogram_err, CatalogError::ExpectedWeighted(Category::Gender));
}

#[test]
fn custom_field_specs_flow_through_to_marks() {
    let records = RecordTable::from_columns(
        vec!["turnout_shap".to_string(), "turnout".to_string()],
        vec![vec![0.3], vec![0.65]],
    )
    .unwrap();
    let mut catalog = FieldCatalog::new();
    catalog.insert(
        Category::Party,
        FieldGroup::PerField(vec![
            FieldSpec::new("turnout_shap", "Turnout").with_intensity("turnout"),
        ]),
    );
    let spec = BeeswarmChartSpec::new(Category::Party, Rect::new(0.0, 0.0, 100.0, 50.0));
    let marks = spec.marks(&records, &catalog).unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].value, 0.3);
    assert_eq!(marks[0].intensity, 0.65);
    // A single observation sits exactly on its row baseline.
    assert!((marks[0].pos.y - 25.0).abs() < 1e-9);
}
