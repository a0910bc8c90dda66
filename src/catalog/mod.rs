//! # Deep-sky catalog model and selection
//!
//! This module gathers the **catalog side** of the planner:
//!
//! - [`CatalogRecord`] — serde model of one row of the combined NGC/IC/Messier
//!   dataset, with the display-name resolution used everywhere downstream.
//! - [`Catalog`] — the user-facing catalog selector. Catalog filtering happens
//!   **exactly once, here**: the dataset search returns the unfiltered record
//!   set and [`Catalog::filter`] is the single authority, because only the
//!   local side can express the Caldwell selection (a static table of NGC/IC
//!   designations, not a dataset column).
//! - [`caldwell`] — the fixed 109-entry Caldwell mapping.
//! - [`search`] — the remote dataset search collaborator.
//!
//! ## See also
//! ------------
//! * [`crate::targets::compute_visible_targets`] – Consumer of the filtered set.

pub mod caldwell;
pub mod record;
pub mod search;

use std::str::FromStr;

pub use record::CatalogRecord;

use crate::skywatch_errors::SkywatchError;

/// User-facing catalog selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Messier,
    Ngc,
    Ic,
    Caldwell,
}

impl Catalog {
    /// Catalog identifier as spelled in the dataset's `catalog` column.
    pub fn label(&self) -> &'static str {
        match self {
            Catalog::Messier => "Messier",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Caldwell => "Caldwell",
        }
    }

    /// Keep the records belonging to this catalog.
    ///
    /// `Messier`/`NGC`/`IC` match the row's `catalog` column case-insensitively.
    /// `Caldwell` keeps rows whose NGC designation — or IC designation for rows
    /// without one — appears in the static Caldwell table.
    pub fn filter(&self, records: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
        match self {
            Catalog::Caldwell => records
                .into_iter()
                .filter(|record| {
                    record
                        .ngc
                        .as_deref()
                        .or(record.ic.as_deref())
                        .is_some_and(caldwell::contains)
                })
                .collect(),
            _ => records
                .into_iter()
                .filter(|record| {
                    record
                        .catalog_id
                        .as_deref()
                        .is_some_and(|id| id.eq_ignore_ascii_case(self.label()))
                })
                .collect(),
        }
    }
}

impl FromStr for Catalog {
    type Err = SkywatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "messier" => Ok(Catalog::Messier),
            "ngc" => Ok(Catalog::Ngc),
            "ic" => Ok(Catalog::Ic),
            "caldwell" => Ok(Catalog::Caldwell),
            _ => Err(SkywatchError::UnknownCatalog(s.to_string())),
        }
    }
}
