pub mod booking;
pub mod payment;
pub mod repository;
pub mod reservation;
pub mod tour;

pub use booking::{Booking, BookingStatus};
pub use payment::{PaymentOrchestrator, PendingPayment, StkPushSimulator, StkSimulatorSettings};
pub use repository::{BookingRepository, TourRepository};
pub use reservation::{PaymentPhase, ReservationError, ReservationFlow, ReservationStep};
pub use tour::{TourRequest, TourStatus};
