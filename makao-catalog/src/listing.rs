use chrono::{DateTime, NaiveDate, Utc};
use makao_shared::money::{format_price, PriceUnit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing categories in the marketplace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingCategory {
    Sale,
    Rent,
    ShortStay,
    Land,
}

/// Land-specific fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandDetails {
    pub zoning: String,
    pub has_title_deed: bool,
    pub plot_size: String,
}

/// A property record shown in search results.
///
/// `price_ksh` is the nightly rate for short stays, the monthly rate for
/// rentals, and the asking price otherwise. Short-stay fields (`amenities`,
/// `max_guests`, the availability window) are unset on other categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub category: ListingCategory,
    pub price_ksh: i64,
    pub price_display: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sq_m: Option<u32>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub max_guests: Option<u32>,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
    pub land: Option<LandDetails>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn new(
        title: &str,
        location: &str,
        category: ListingCategory,
        price_ksh: i64,
    ) -> Self {
        let unit = match category {
            ListingCategory::ShortStay => PriceUnit::PerNight,
            ListingCategory::Rent => PriceUnit::PerMonth,
            ListingCategory::Sale | ListingCategory::Land => PriceUnit::Total,
        };

        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            location: location.to_string(),
            category,
            price_ksh,
            price_display: format_price(price_ksh, unit),
            bedrooms: 0,
            bathrooms: 0,
            area_sq_m: None,
            images: Vec::new(),
            amenities: Vec::new(),
            max_guests: None,
            available_from: None,
            available_to: None,
            land: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_area(mut self, area_sq_m: u32) -> Self {
        self.area_sq_m = Some(area_sq_m);
        self
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Short-stay capacity and amenity set. Amenity tokens are normalized to
    /// lowercase so filter matching stays case-insensitive.
    pub fn with_stay_details(mut self, max_guests: u32, amenities: &[&str]) -> Self {
        self.max_guests = Some(max_guests);
        self.amenities = amenities.iter().map(|a| a.to_lowercase()).collect();
        self
    }

    pub fn with_availability(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.available_from = Some(from);
        self.available_to = Some(to);
        self
    }

    pub fn with_land_details(mut self, zoning: &str, has_title_deed: bool, plot_size: &str) -> Self {
        self.land = Some(LandDetails {
            zoning: zoning.to_string(),
            has_title_deed,
            plot_size: plot_size.to_string(),
        });
        self
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        let wanted = amenity.to_lowercase();
        self.amenities.iter().any(|a| *a == wanted)
    }

    /// One-line summary used in map popups and admin tables.
    pub fn summary(&self) -> String {
        if self.bedrooms > 0 {
            format!("{} bed · {} · {}", self.bedrooms, self.location, self.price_display)
        } else {
            format!("{} · {}", self.location, self.price_display)
        }
    }
}
