use crate::listing::{Listing, ListingCategory};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date")
}

/// The compiled-in mock inventory. Seeded into the store at bootstrap; the
/// storefront never mutates it, the admin service may.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        // Short stays
        Listing::new("Kilimani Skyline Studio", "Kilimani, Nairobi", ListingCategory::ShortStay, 4_500)
            .with_rooms(1, 1)
            .with_area(38)
            .with_stay_details(4, &["wifi", "parking", "kitchen", "security"])
            .with_availability(day(2025, 1, 1), day(2025, 12, 31))
            .with_images(&["kilimani-studio-1.jpg", "kilimani-studio-2.jpg"]),
        Listing::new("Westlands Garden Apartment", "Westlands, Nairobi", ListingCategory::ShortStay, 7_800)
            .with_rooms(2, 2)
            .with_area(85)
            .with_stay_details(5, &["wifi", "pool", "gym", "parking", "balcony"])
            .with_availability(day(2025, 1, 15), day(2025, 6, 30))
            .with_images(&["westlands-garden-1.jpg"]),
        Listing::new("Diani Beachfront Villa", "Diani-Beach, Kwale", ListingCategory::ShortStay, 15_000)
            .with_rooms(4, 3)
            .with_area(220)
            .with_stay_details(8, &["wifi", "pool", "kitchen", "garden", "security"])
            .with_availability(day(2025, 1, 1), day(2025, 12, 31))
            .with_images(&["diani-villa-1.jpg", "diani-villa-2.jpg", "diani-villa-3.jpg"]),
        Listing::new("Nyali Coral Cottage", "Nyali, Mombasa", ListingCategory::ShortStay, 6_200)
            .with_rooms(2, 1)
            .with_area(70)
            .with_stay_details(4, &["wifi", "kitchen", "parking"])
            .with_availability(day(2025, 1, 1), day(2025, 5, 1))
            .with_images(&["nyali-cottage-1.jpg"]),
        Listing::new("Naivasha Lakeview Cabin", "Naivasha, Nakuru", ListingCategory::ShortStay, 9_500)
            .with_rooms(3, 2)
            .with_area(120)
            .with_stay_details(6, &["wifi", "garden", "parking", "kitchen"])
            .with_availability(day(2025, 3, 1), day(2025, 11, 30))
            .with_images(&["naivasha-cabin-1.jpg", "naivasha-cabin-2.jpg"]),
        // Rentals
        Listing::new("Lavington Maisonette", "Lavington, Nairobi", ListingCategory::Rent, 185_000)
            .with_rooms(4, 4)
            .with_area(320)
            .with_images(&["lavington-maisonette-1.jpg"]),
        Listing::new("Kileleshwa 2BR Apartment", "Kileleshwa, Nairobi", ListingCategory::Rent, 85_000)
            .with_rooms(2, 2)
            .with_area(110)
            .with_images(&["kileleshwa-2br-1.jpg"]),
        Listing::new("Syokimau Bedsitter", "Syokimau, Machakos", ListingCategory::Rent, 18_000)
            .with_rooms(1, 1)
            .with_area(30)
            .with_images(&["syokimau-bedsitter-1.jpg"]),
        // Sales
        Listing::new("Karen Country Bungalow", "Karen, Nairobi", ListingCategory::Sale, 32_000_000)
            .with_rooms(4, 3)
            .with_area(450)
            .with_images(&["karen-bungalow-1.jpg", "karen-bungalow-2.jpg"]),
        Listing::new("Runda Executive Townhouse", "Runda, Nairobi", ListingCategory::Sale, 58_000_000)
            .with_rooms(5, 5)
            .with_area(600)
            .with_images(&["runda-townhouse-1.jpg"]),
        // Land
        Listing::new("Kitengela Quarter Acre", "Kitengela, Kajiado", ListingCategory::Land, 2_500_000)
            .with_land_details("residential", true, "0.25 acre")
            .with_images(&["kitengela-plot-1.jpg"]),
        Listing::new("Ruiru Commercial Plot", "Ruiru, Kiambu", ListingCategory::Land, 7_800_000)
            .with_land_details("commercial", true, "0.5 acre")
            .with_images(&["ruiru-plot-1.jpg"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_every_category() {
        let listings = seed_listings();
        for category in [
            ListingCategory::Sale,
            ListingCategory::Rent,
            ListingCategory::ShortStay,
            ListingCategory::Land,
        ] {
            assert!(
                listings.iter().any(|l| l.category == category),
                "no seed listing for {:?}",
                category
            );
        }
    }

    #[test]
    fn test_short_stays_declare_capacity_and_window() {
        for listing in seed_listings() {
            if listing.category == ListingCategory::ShortStay {
                assert!(listing.max_guests.is_some(), "{} missing capacity", listing.title);
                assert!(
                    listing.available_from.is_some() && listing.available_to.is_some(),
                    "{} missing availability window",
                    listing.title
                );
            }
        }
    }
}
