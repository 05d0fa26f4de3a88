pub mod listing;
pub mod pricing;
pub mod repository;
pub mod seed;

pub use listing::{LandDetails, Listing, ListingCategory};
pub use pricing::{nights_between, QuoteError, StayQuote};
pub use repository::ListingRepository;
