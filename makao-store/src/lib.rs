pub mod app_config;
pub mod events;
pub mod memory;

pub use app_config::Config;
pub use events::{EventBus, MarketEvent};
pub use memory::MemoryStore;
