use chrono::{DateTime, NaiveDate, Utc};
use makao_catalog::StayQuote;
use makao_core::identity::ContactDetails;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    PendingPayment,
    Confirmed,
    Cancelled,
}

/// A confirmed-or-pending stay reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Human-facing reference, `MKO-` plus eight decimal digits.
    pub reference: String,
    pub listing_id: Uuid,
    pub guest: ContactDetails,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub guests: u32,
    pub total_ksh: i64,
    pub mpesa_receipt: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_quote(listing_id: Uuid, guest: ContactDetails, quote: &StayQuote, guests: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            reference: generate_reference(),
            listing_id,
            guest,
            check_in: quote.check_in,
            check_out: quote.check_out,
            nights: quote.nights,
            guests,
            total_ksh: quote.total_ksh,
            mpesa_receipt: None,
            status: BookingStatus::PendingPayment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn confirm(&mut self, mpesa_receipt: String) {
        self.mpesa_receipt = Some(mpesa_receipt);
        self.status = BookingStatus::Confirmed;
        self.updated_at = Utc::now();
    }

    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}

/// Reference derived from a random UUID rather than the wall clock, so rapid
/// submissions cannot collide on the same millisecond.
pub fn generate_reference() -> String {
    let digits = Uuid::new_v4().as_u128() % 100_000_000;
    format!("MKO-{:08}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> StayQuote {
        StayQuote::compute(
            4500,
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
        )
        .unwrap()
    }

    fn guest() -> ContactDetails {
        ContactDetails::new("Jane Wanjiku", "jane@example.com", "0712345678").unwrap()
    }

    #[test]
    fn test_reference_format() {
        let reference = generate_reference();
        let digits = reference.strip_prefix("MKO-").expect("fixed prefix");
        assert_eq!(digits.len(), 8);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_booking_carries_quote_totals() {
        let booking = Booking::from_quote(Uuid::new_v4(), guest(), &quote(), 2);
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.total_ksh, 13_500);
        assert_eq!(booking.status, BookingStatus::PendingPayment);
        assert!(booking.mpesa_receipt.is_none());
    }

    #[test]
    fn test_confirm_records_receipt() {
        let mut booking = Booking::from_quote(Uuid::new_v4(), guest(), &quote(), 2);
        booking.confirm("SFE8A1B2C3".to_string());
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.mpesa_receipt.as_deref(), Some("SFE8A1B2C3"));
    }
}
