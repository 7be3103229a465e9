//! Collaborator seam for day markers.
//!
//! ## Usage
//!
//! The host's reminder store implements [`ItemSource`]; the engine queries
//! it only to decide whether a day cell shows a marker and never reads or
//! mutates reminder content. A failing source degrades to "no marker".

use chrono::NaiveDate;
use thiserror::Error;

/// Errors an [`ItemSource`] may report.
#[derive(Debug, Error)]
pub enum ItemSourceError {
    /// The backing store could not be reached.
    #[error("item store unavailable: {0}")]
    Unavailable(String),
    /// The store answered but the query itself failed.
    #[error("item query failed: {0}")]
    Query(String),
}

/// Supplies "does this day have at least one item" answers.
pub trait ItemSource: Send + Sync {
    /// Returns whether `day` has at least one item.
    fn has_items(&self, day: NaiveDate) -> Result<bool, ItemSourceError>;
}

impl<F> ItemSource for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn has_items(&self, day: NaiveDate) -> Result<bool, ItemSourceError> {
        Ok(self(day))
    }
}
