use crate::booking::{Booking, BookingStatus};
use crate::tour::{TourRequest, TourStatus};
use async_trait::async_trait;
use uuid::Uuid;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save_booking(&self, booking: &Booking) -> Result<(), RepoError>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, RepoError>;

    async fn list_bookings(&self) -> Result<Vec<Booking>, RepoError>;

    async fn update_booking_status(&self, id: Uuid, status: BookingStatus) -> Result<(), RepoError>;
}

/// Repository trait for tour-request data access
#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn save_tour(&self, tour: &TourRequest) -> Result<(), RepoError>;

    async fn get_tour(&self, id: Uuid) -> Result<Option<TourRequest>, RepoError>;

    async fn list_tours(&self) -> Result<Vec<TourRequest>, RepoError>;

    async fn update_tour_status(&self, id: Uuid, status: TourStatus) -> Result<(), RepoError>;
}
