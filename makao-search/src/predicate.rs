use crate::criteria::FilterCriteria;
use makao_catalog::Listing;

/// Case-insensitive location form with `-` treated as a space, so
/// "Diani-Beach" and "diani beach" compare equal.
fn normalize_location(raw: &str) -> String {
    raw.to_lowercase().replace('-', " ")
}

/// The availability predicate: a listing is visible iff it passes every
/// clause below (logical AND). Inputs are already normalized by the filter
/// store; this function is total and has no error path.
pub fn is_visible(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let (min, max) = criteria.price_range;
    if listing.price_ksh < min || listing.price_ksh > max {
        return false;
    }

    // Capacity binds only where the listing declares one; sale/rent/land
    // listings carry no guest capacity and pass.
    if let Some(capacity) = listing.max_guests {
        if capacity < criteria.guests {
            return false;
        }
    }

    if !criteria.categories.is_empty() && !criteria.categories.contains(&listing.category) {
        return false;
    }

    if let Some(token) = criteria.location.as_deref() {
        if !normalize_location(&listing.location).contains(&normalize_location(token)) {
            return false;
        }
    }

    // A dated search requires the stay to sit fully inside the listing's
    // declared window; no declared window means containment cannot hold.
    if let (Some(check_in), Some(check_out)) = (criteria.check_in, criteria.check_out) {
        match (listing.available_from, listing.available_to) {
            (Some(from), Some(to)) => {
                if check_in < from || check_out > to {
                    return false;
                }
            }
            _ => return false,
        }
    }

    if !criteria.amenities.is_empty()
        && !criteria.amenities.iter().all(|a| listing.has_amenity(a))
    {
        return false;
    }

    true
}
