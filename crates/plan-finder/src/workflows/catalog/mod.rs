//! Static reference data for the coverage-limit selects.
//!
//! The plans API only understands a fixed set of inpatient tiers and outpatient options. The
//! catalog ships with the standard list and can be swapped for a CSV export without touching the
//! rule set.

mod parser;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Monetary ceiling (in Kshs) selected for a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverAmount(pub u64);

impl CoverAmount {
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Display form used by the select options, e.g. `Kshs 1,000,000`.
    pub fn label(self) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("Kshs {grouped}")
    }
}

impl fmt::Display for CoverAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which select a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    Inpatient,
    Outpatient,
}

impl LimitKind {
    pub const fn label(self) -> &'static str {
        match self {
            LimitKind::Inpatient => "inpatient",
            LimitKind::Outpatient => "outpatient",
        }
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOption {
    pub amount: CoverAmount,
    pub label: String,
}

impl LimitOption {
    pub fn new(amount: u64) -> Self {
        let amount = CoverAmount(amount);
        Self {
            amount,
            label: amount.label(),
        }
    }
}

const STANDARD_INPATIENT_TIERS: [u64; 8] = [
    100_000, 250_000, 500_000, 1_000_000, 2_000_000, 3_000_000, 5_000_000, 10_000_000,
];

const STANDARD_OUTPATIENT_OPTIONS: [u64; 6] =
    [25_000, 50_000, 75_000, 100_000, 150_000, 200_000];

/// Inpatient tiers and outpatient options offered by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub inpatient_tiers: Vec<LimitOption>,
    pub outpatient_options: Vec<LimitOption>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            inpatient_tiers: STANDARD_INPATIENT_TIERS
                .iter()
                .copied()
                .map(LimitOption::new)
                .collect(),
            outpatient_options: STANDARD_OUTPATIENT_OPTIONS
                .iter()
                .copied()
                .map(LimitOption::new)
                .collect(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let rows = parser::parse_rows(reader)?;

        let mut inpatient_tiers = Vec::new();
        let mut outpatient_options = Vec::new();
        for row in rows {
            match row.kind {
                LimitKind::Inpatient => inpatient_tiers.push(row.option),
                LimitKind::Outpatient => outpatient_options.push(row.option),
            }
        }

        Ok(Self {
            inpatient_tiers: finalize(inpatient_tiers, LimitKind::Inpatient)?,
            outpatient_options: finalize(outpatient_options, LimitKind::Outpatient)?,
        })
    }

    pub fn options(&self, kind: LimitKind) -> &[LimitOption] {
        match kind {
            LimitKind::Inpatient => &self.inpatient_tiers,
            LimitKind::Outpatient => &self.outpatient_options,
        }
    }

    /// Returns the amount when it is one of the offered options for `kind`.
    pub fn lookup(&self, kind: LimitKind, amount: u64) -> Option<CoverAmount> {
        self.options(kind)
            .iter()
            .map(|option| option.amount)
            .find(|candidate| candidate.value() == amount)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn finalize(
    mut options: Vec<LimitOption>,
    kind: LimitKind,
) -> Result<Vec<LimitOption>, CatalogError> {
    options.sort_by_key(|option| option.amount);
    options.dedup_by_key(|option| option.amount);
    if options.is_empty() {
        return Err(CatalogError::Empty(kind));
    }
    Ok(options)
}

/// Failure loading a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown limit kind '{0}' (expected inpatient or outpatient)")]
    UnknownKind(String),
    #[error("catalog defines no {} options", .0.label())]
    Empty(LimitKind),
}
