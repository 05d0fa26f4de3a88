pub mod criteria;
pub mod map;
pub mod predicate;
pub mod store;

pub use criteria::FilterCriteria;
pub use map::{pins_for, MapPin, PriceTier};
pub use predicate::is_visible;
pub use store::{FilterAction, FilterStore};
