use chrono::NaiveDate;
use makao_catalog::ListingCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cleared price slider bounds, in KSh per night.
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (0, 50_000);

/// The active set of user-selected filter values.
///
/// `default()` is the canonical cleared state; `ClearFilters` must restore
/// exactly this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub price_range: (i64, i64),
    pub guests: u32,
    /// Empty means any category.
    pub categories: HashSet<ListingCategory>,
    /// AND semantics: a listing must carry every selected amenity.
    pub amenities: HashSet<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Free-text location token, matched case-insensitively.
    pub location: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: DEFAULT_PRICE_RANGE,
            guests: 1,
            categories: HashSet::new(),
            amenities: HashSet::new(),
            check_in: None,
            check_out: None,
            location: None,
        }
    }
}

impl FilterCriteria {
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}
