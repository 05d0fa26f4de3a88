use chrono::{DateTime, NaiveDate, Utc};
use makao_core::identity::{IdentityError, Msisdn};
use makao_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourStatus {
    Requested,
    Confirmed,
    Declined,
    Completed,
}

/// A request to view a property in person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourRequest {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub visitor_name: String,
    pub phone: Masked<Msisdn>,
    pub preferred_date: NaiveDate,
    pub note: Option<String>,
    pub status: TourStatus,
    pub created_at: DateTime<Utc>,
}

impl TourRequest {
    pub fn new(
        listing_id: Uuid,
        visitor_name: &str,
        phone: &str,
        preferred_date: NaiveDate,
        note: Option<String>,
    ) -> Result<Self, TourError> {
        let visitor_name = visitor_name.trim();
        if visitor_name.is_empty() {
            return Err(TourError::MissingName);
        }
        let msisdn = Msisdn::parse(phone)?;

        Ok(Self {
            id: Uuid::new_v4(),
            listing_id,
            visitor_name: visitor_name.to_string(),
            phone: Masked::new(msisdn),
            preferred_date,
            note,
            status: TourStatus::Requested,
            created_at: Utc::now(),
        })
    }

    pub fn confirm(&mut self) -> Result<(), TourError> {
        self.transition(TourStatus::Requested, TourStatus::Confirmed)
    }

    pub fn decline(&mut self) -> Result<(), TourError> {
        self.transition(TourStatus::Requested, TourStatus::Declined)
    }

    pub fn complete(&mut self) -> Result<(), TourError> {
        self.transition(TourStatus::Confirmed, TourStatus::Completed)
    }

    fn transition(&mut self, from: TourStatus, to: TourStatus) -> Result<(), TourError> {
        if self.status != from {
            return Err(TourError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", to),
            });
        }
        self.status = to;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TourError {
    #[error("Visitor name is required")]
    MissingName,

    #[error(transparent)]
    Phone(#[from] IdentityError),

    #[error("Invalid tour transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TourRequest {
        TourRequest::new(
            Uuid::new_v4(),
            "Brian Otieno",
            "0722334455",
            NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            Some("Saturday morning preferred".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_tour_lifecycle() {
        let mut tour = request();
        assert_eq!(tour.status, TourStatus::Requested);

        tour.confirm().unwrap();
        tour.complete().unwrap();
        assert_eq!(tour.status, TourStatus::Completed);
    }

    #[test]
    fn test_cannot_complete_unconfirmed_tour() {
        let mut tour = request();
        assert!(tour.complete().is_err());
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let result = TourRequest::new(
            Uuid::new_v4(),
            "Brian Otieno",
            "12345",
            NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            None,
        );
        assert!(result.is_err());
    }
}
