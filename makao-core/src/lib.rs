pub mod identity;
pub mod inquiry;
pub mod payment;
pub mod repository;
pub mod user;

pub use identity::{ContactDetails, IdentityError, Msisdn};
pub use payment::{ChargeRequest, PaymentError, PaymentGateway, PaymentOutcome};
