use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod admin;
pub mod contact;
pub mod context;
pub mod error;
pub mod session;
pub mod toast;

pub use admin::{AdminService, Page, PageRequest};
pub use context::{AppContext, Theme};
pub use error::AppError;
pub use session::ReservationSession;
pub use toast::{Toast, ToastLevel, ToastQueue};

/// Install the global tracing subscriber. Call once, before `bootstrap`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "makao_app=debug,makao_booking=debug,makao_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application context: load configuration, seed the in-memory
/// store and wire the event bus, toast queue and payment orchestrator.
pub fn bootstrap() -> anyhow::Result<AppContext> {
    let config = makao_store::Config::load()?;
    bootstrap_with(config)
}

/// Bootstrap with an explicit configuration; tests pin the simulator here.
pub fn bootstrap_with(config: makao_store::Config) -> anyhow::Result<AppContext> {
    tracing::info!(
        push_delay_ms = config.payment.push_delay_ms,
        success_rate = config.payment.success_rate,
        "starting Makao engine"
    );

    let store = Arc::new(makao_store::MemoryStore::with_sample_data());
    Ok(AppContext::new(store, config))
}
