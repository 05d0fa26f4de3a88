pub mod models;
pub mod money;
pub mod pii;

pub use money::format_ksh;
pub use pii::Masked;
