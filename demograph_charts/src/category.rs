// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category configuration tables.
//!
//! The set of chart categories is closed, and every lookup the projector
//! performs goes through an explicit [`FieldCatalog`] argument. Nothing in
//! this crate reads field lists or labels from ambient scope.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A demographic chart category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Party affiliation shares.
    Party,
    /// Gender shares.
    Gender,
    /// Age bracket shares.
    Age,
    /// Primary language shares.
    Language,
    /// Ethnicity shares.
    Ethnicity,
    /// Household income, weighted by registrant count.
    Income,
}

/// One record field feeding a per-field category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Raw record attribute name.
    pub field: &'static str,
    /// Human-readable label for guides and bars.
    pub label: &'static str,
    /// Optional paired attribute carried as observation intensity.
    pub intensity_field: Option<&'static str>,
}

impl FieldSpec {
    /// Creates a field spec with no intensity pairing.
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            intensity_field: None,
        }
    }

    /// Pairs the field with a secondary attribute read as intensity.
    pub const fn with_intensity(mut self, intensity_field: &'static str) -> Self {
        self.intensity_field = Some(intensity_field);
        self
    }
}

/// The shape of one category's data.
///
/// Most categories enumerate several record fields, one observation series
/// each. Income is different: it pairs a value field with a weight field and
/// feeds the histogram binner, so the projector must branch on the shape
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldGroup {
    /// One observation series per listed field.
    PerField(Vec<FieldSpec>),
    /// `(value, weight)` pairs drawn from two fields.
    Weighted {
        /// Field providing the binned value.
        value_field: &'static str,
        /// Field providing the accumulation weight.
        weight_field: &'static str,
    },
}

/// Errors returned when a catalog lookup cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The category has no entry in the catalog.
    UnknownCategory(Category),
    /// The category is configured with the weighted shape, but a per-field
    /// projection was requested.
    ExpectedPerField(Category),
    /// The category is configured per-field, but a weighted projection was
    /// requested.
    ExpectedWeighted(Category),
}

/// An explicit category-to-fields configuration table.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    groups: HashMap<Category, FieldGroup>,
}

impl FieldCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Inserts or replaces the group for a category.
    pub fn insert(&mut self, category: Category, group: FieldGroup) {
        self.groups.insert(category, group);
    }

    /// Returns the group for a category.
    pub fn group(&self, category: Category) -> Result<&FieldGroup, CatalogError> {
        self.groups
            .get(&category)
            .ok_or(CatalogError::UnknownCategory(category))
    }

    /// Returns the field list for a per-field category.
    pub fn per_field(&self, category: Category) -> Result<&[FieldSpec], CatalogError> {
        match self.group(category)? {
            FieldGroup::PerField(fields) => Ok(fields),
            FieldGroup::Weighted { .. } => Err(CatalogError::ExpectedPerField(category)),
        }
    }

    /// Returns the `(value, weight)` field pair for a weighted category.
    pub fn weighted(&self, category: Category) -> Result<(&'static str, &'static str), CatalogError> {
        match self.group(category)? {
            FieldGroup::Weighted {
                value_field,
                weight_field,
            } => Ok((*value_field, *weight_field)),
            FieldGroup::PerField(_) => Err(CatalogError::ExpectedWeighted(category)),
        }
    }

    /// The voter-registration dataset's category tables.
    ///
    /// Shares per party/gender/age/language/ethnicity, plus mean household
    /// income weighted by registrant count for the histogram view.
    pub fn voter_registration() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            Category::Party,
            FieldGroup::PerField(vec![
                FieldSpec::new("party_npp", "No Party"),
                FieldSpec::new("party_dem", "Democrat"),
                FieldSpec::new("party_rep", "Republican"),
                FieldSpec::new("party_lib", "Libertarian"),
                FieldSpec::new("party_grn", "Green"),
                FieldSpec::new("party_con", "Conservative"),
                FieldSpec::new("party_ain", "American Independent"),
                FieldSpec::new("party_scl", "Socialist"),
                FieldSpec::new("party_oth", "Other"),
            ]),
        );
        catalog.insert(
            Category::Gender,
            FieldGroup::PerField(vec![
                FieldSpec::new("gender_m", "Male"),
                FieldSpec::new("gender_f", "Female"),
                FieldSpec::new("gender_unknown", "Unknown"),
            ]),
        );
        catalog.insert(
            Category::Age,
            FieldGroup::PerField(vec![
                FieldSpec::new("age_18_19", "18-19"),
                FieldSpec::new("age_20_24", "20-24"),
                FieldSpec::new("age_25_29", "25-29"),
                FieldSpec::new("age_30_34", "30-34"),
                FieldSpec::new("age_35_44", "35-44"),
                FieldSpec::new("age_45_54", "45-54"),
                FieldSpec::new("age_55_64", "55-64"),
                FieldSpec::new("age_65_74", "65-74"),
                FieldSpec::new("age_75_84", "75-84"),
                FieldSpec::new("age_85over", "85+"),
            ]),
        );
        catalog.insert(
            Category::Language,
            FieldGroup::PerField(vec![
                FieldSpec::new("lang_english", "English"),
                FieldSpec::new("lang_spanish", "Spanish"),
                FieldSpec::new("lang_portuguese", "Portuguese"),
                FieldSpec::new("lang_chinese", "Chinese"),
                FieldSpec::new("lang_italian", "Italian"),
                FieldSpec::new("lang_vietnamese", "Vietnamese"),
                FieldSpec::new("lang_other", "Other"),
                FieldSpec::new("lang_unknown", "Unknown"),
            ]),
        );
        catalog.insert(
            Category::Ethnicity,
            FieldGroup::PerField(vec![
                FieldSpec::new("eth1_eur", "European"),
                FieldSpec::new("eth1_hisp", "Hispanic"),
                FieldSpec::new("eth1_aa", "African-American"),
                FieldSpec::new("eth1_esa", "East and South Asian"),
                FieldSpec::new("eth1_oth", "Other"),
                FieldSpec::new("eth1_unk", "Unknown"),
            ]),
        );
        catalog.insert(
            Category::Income,
            FieldGroup::Weighted {
                value_field: "mean_hh_income",
                weight_field: "total_reg",
            },
        );
        catalog
    }
}
