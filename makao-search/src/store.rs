use crate::criteria::FilterCriteria;
use crate::predicate::is_visible;
use chrono::NaiveDate;
use makao_catalog::{Listing, ListingCategory};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Explicit mutations of the filter state. All input normalization lives
/// here so the predicate stays total: inverted price ranges are swapped,
/// guest counts floor at 1, amenity tokens are lowercased and blank location
/// text clears the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "action")]
pub enum FilterAction {
    SetPriceRange { min: i64, max: i64 },
    SetGuests { guests: u32 },
    ToggleCategory { category: ListingCategory },
    ToggleAmenity { amenity: String },
    SetDates {
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    },
    SetLocation { location: Option<String> },
    ClearFilters,
}

/// Holds the active criteria over a listing snapshot and recomputes the
/// visible set on every dispatched action. Results keep the snapshot order
/// (stable filter); deactivated listings never surface.
pub struct FilterStore {
    listings: Vec<Listing>,
    criteria: FilterCriteria,
    visible: Vec<Uuid>,
}

impl FilterStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut store = Self {
            listings,
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
        };
        store.recompute();
        store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible_ids(&self) -> &[Uuid] {
        &self.visible
    }

    pub fn visible_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| self.visible.contains(&l.id))
            .collect()
    }

    /// Apply one action and return the recomputed visible set.
    pub fn dispatch(&mut self, action: FilterAction) -> &[Uuid] {
        match action {
            FilterAction::SetPriceRange { min, max } => {
                self.criteria.price_range = if min <= max { (min, max) } else { (max, min) };
            }
            FilterAction::SetGuests { guests } => {
                self.criteria.guests = guests.max(1);
            }
            FilterAction::ToggleCategory { category } => {
                if !self.criteria.categories.remove(&category) {
                    self.criteria.categories.insert(category);
                }
            }
            FilterAction::ToggleAmenity { amenity } => {
                let token = amenity.to_lowercase();
                if !self.criteria.amenities.remove(&token) {
                    self.criteria.amenities.insert(token);
                }
            }
            FilterAction::SetDates { check_in, check_out } => {
                self.criteria.check_in = check_in;
                self.criteria.check_out = check_out;
            }
            FilterAction::SetLocation { location } => {
                self.criteria.location =
                    location.map(|l| l.trim().to_string()).filter(|l| !l.is_empty());
            }
            FilterAction::ClearFilters => {
                self.criteria = FilterCriteria::default();
            }
        }

        self.recompute();
        &self.visible
    }

    fn recompute(&mut self) {
        self.visible = self
            .listings
            .iter()
            .filter(|l| l.is_active && is_visible(l, &self.criteria))
            .map(|l| l.id)
            .collect();
        tracing::debug!(visible = self.visible.len(), total = self.listings.len(), "filter recomputed");
    }
}
