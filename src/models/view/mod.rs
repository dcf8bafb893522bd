// View module
// Calendar zoom levels and selection modes

use serde::{Deserialize, Serialize};

/// Which grid the calendar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateView {
    /// Day grid
    #[default]
    Month,
    /// Month grid
    Year,
    /// Year grid
    #[serde(alias = "multi-years")]
    MultiYear,
}

impl DateView {
    pub fn name(&self) -> &'static str {
        match self {
            DateView::Month => "month",
            DateView::Year => "year",
            DateView::MultiYear => "multi-year",
        }
    }
}

/// How picks map onto the stored selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectMode {
    #[default]
    Single,
    Range,
    RangeFrom,
    RangeTo,
}

impl SelectMode {
    pub fn is_single(&self) -> bool {
        matches!(self, SelectMode::Single)
    }

    /// `range`, `rangeFrom` and `rangeTo` all track two endpoints
    pub fn is_range(&self) -> bool {
        !self.is_single()
    }
}
