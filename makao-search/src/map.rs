use makao_catalog::{Listing, ListingCategory};
use makao_shared::format_ksh;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nightly-price band controlling pin color on the stays map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
}

impl PriceTier {
    pub fn for_nightly(price_ksh: i64) -> Self {
        if price_ksh < 5_000 {
            PriceTier::Budget
        } else if price_ksh < 10_000 {
            PriceTier::Mid
        } else {
            PriceTier::Premium
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PriceTier::Budget => "#16a34a",
            PriceTier::Mid => "#d97706",
            PriceTier::Premium => "#dc2626",
        }
    }
}

/// Pin data handed to the map embed: price label on the pin, listing summary
/// in the popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPin {
    pub listing_id: Uuid,
    pub price_ksh: i64,
    pub tier: PriceTier,
    pub label: String,
    pub popup_summary: String,
}

/// Build pins for the short-stay map from the current listing set.
pub fn pins_for(listings: &[Listing]) -> Vec<MapPin> {
    listings
        .iter()
        .filter(|l| l.is_active && l.category == ListingCategory::ShortStay)
        .map(|l| MapPin {
            listing_id: l.id,
            price_ksh: l.price_ksh,
            tier: PriceTier::for_nightly(l.price_ksh),
            label: format_ksh(l.price_ksh),
            popup_summary: format!("{} | {}", l.title, l.summary()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use makao_catalog::seed::seed_listings;

    #[test]
    fn test_tier_bands() {
        assert_eq!(PriceTier::for_nightly(4_500), PriceTier::Budget);
        assert_eq!(PriceTier::for_nightly(5_000), PriceTier::Mid);
        assert_eq!(PriceTier::for_nightly(9_999), PriceTier::Mid);
        assert_eq!(PriceTier::for_nightly(15_000), PriceTier::Premium);

        // Each band renders with its own pin color.
        assert_ne!(PriceTier::Budget.color(), PriceTier::Mid.color());
        assert_ne!(PriceTier::Mid.color(), PriceTier::Premium.color());
    }

    #[test]
    fn test_pins_cover_short_stays_only() {
        let listings = seed_listings();
        let pins = pins_for(&listings);

        let stay_count = listings
            .iter()
            .filter(|l| l.category == ListingCategory::ShortStay)
            .count();
        assert_eq!(pins.len(), stay_count);

        for pin in &pins {
            assert!(pin.label.starts_with("KSh "));
            assert!(!pin.popup_summary.is_empty());
        }
    }
}
