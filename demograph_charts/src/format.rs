// Copyright 2026 the Demograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bin label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use demograph_core::{Bin, WeightedBin};

/// How a bucket's upper edge becomes a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLabel {
    /// The plain upper-edge value with a fixed number of decimals.
    Upper {
        /// Decimal places to print.
        decimals: usize,
    },
    /// `$N,000` labels for income buckets.
    ///
    /// Upper edges are snapped to bin-width multiples, so for round widths
    /// the printed quotient is integral.
    DollarsThousands,
}

impl BinLabel {
    /// Formats one upper-edge value.
    pub fn format(&self, upper: f64) -> String {
        match self {
            Self::Upper { decimals } => format!("{upper:.prec$}", prec = *decimals),
            Self::DollarsThousands => format!("${},000", (upper / 1000.0).round()),
        }
    }

    /// Labels every bucket of a binning result.
    pub fn apply(&self, bins: &[WeightedBin]) -> Vec<Bin> {
        bins.iter()
            .map(|b| Bin {
                label: self.format(b.upper),
                proportion: b.proportion,
            })
            .collect()
    }
}
