// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned record storage and the accessor trait the pipeline reads through.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Read-only access to a set of entity records with named numeric attributes.
///
/// Implementors expose one `f64` per `(row, field)` pair. A missing field or
/// out-of-range row returns `None`; projection layers treat that as `0`.
pub trait RecordData: core::fmt::Debug {
    /// Returns the number of records.
    fn row_count(&self) -> usize;

    /// Gets a numeric attribute for a record, if present.
    fn f64(&self, row: usize, field: &str) -> Option<f64>;
}

/// Errors returned when building a [`RecordTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTableError {
    /// The field list is empty.
    EmptyFields,
    /// The number of columns does not match the number of fields.
    ColumnCountMismatch,
    /// Columns have differing lengths.
    RaggedColumns,
    /// The row-key list does not match the row count.
    RowKeyCountMismatch,
}

/// An owned columnar table of numeric records.
///
/// This is a deliberately small representation:
/// - stable `row_keys` (for downstream mark identity),
/// - a fixed set of named numeric columns (`f64`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    /// Stable keys for each row.
    pub row_keys: Vec<u64>,
    fields: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl RecordTable {
    /// Creates a table from field names and their aligned columns.
    ///
    /// Row keys default to the row index; use [`RecordTable::with_row_keys`]
    /// to supply loader-provided identities.
    pub fn from_columns(
        fields: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self, RecordTableError> {
        if fields.is_empty() {
            return Err(RecordTableError::EmptyFields);
        }
        if fields.len() != columns.len() {
            return Err(RecordTableError::ColumnCountMismatch);
        }
        let rows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|c| c.len() != rows) {
            return Err(RecordTableError::RaggedColumns);
        }
        Ok(Self {
            row_keys: (0..rows as u64).collect(),
            fields,
            columns,
        })
    }

    /// Replaces the default row keys with loader-provided ones.
    pub fn with_row_keys(mut self, row_keys: Vec<u64>) -> Result<Self, RecordTableError> {
        if row_keys.len() != self.row_count() {
            return Err(RecordTableError::RowKeyCountMismatch);
        }
        self.row_keys = row_keys;
        Ok(self)
    }

    /// Returns the field names in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns a column index for a field name, if present.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }
}

impl RecordData for RecordTable {
    fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    fn f64(&self, row: usize, field: &str) -> Option<f64> {
        let ci = self.field_index(field)?;
        self.columns.get(ci)?.get(row).copied()
    }
}
