use makao_booking::reservation::ReservationError;
use makao_booking::tour::TourError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Listing cannot be reserved: {0}")]
    NotBookable(String),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error(transparent)]
    Tour(#[from] TourError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Wrap a repository error at the application boundary.
    pub fn repo(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AppError::Other(anyhow::anyhow!(err))
    }
}
