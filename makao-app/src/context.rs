use crate::admin::AdminService;
use crate::contact::whatsapp_link;
use crate::error::AppError;
use crate::session::ReservationSession;
use crate::toast::ToastQueue;
use chrono::{NaiveDate, Utc};
use makao_booking::payment::{PaymentOrchestrator, StkPushSimulator, StkSimulatorSettings};
use makao_booking::repository::TourRepository;
use makao_booking::tour::TourRequest;
use makao_catalog::repository::ListingRepository;
use makao_catalog::{Listing, ListingCategory};
use makao_core::inquiry::Inquiry;
use makao_core::repository::InquiryRepository;
use makao_search::{FilterCriteria, FilterStore};
use makao_shared::models::events::{InquiryReceivedEvent, SearchPerformedEvent, TourRequestedEvent};
use makao_store::{Config, EventBus, MarketEvent, MemoryStore};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Application-level context injected into the view tree: storage, config,
/// event bus, toast queue, payment orchestration and theme state. Built once
/// by `bootstrap`, dropped on shutdown.
pub struct AppContext {
    pub store: Arc<MemoryStore>,
    pub config: Config,
    pub events: EventBus,
    pub toasts: ToastQueue,
    payments: Arc<PaymentOrchestrator>,
    theme: RwLock<Theme>,
}

impl AppContext {
    pub fn new(store: Arc<MemoryStore>, config: Config) -> Self {
        let simulator = StkPushSimulator::new(StkSimulatorSettings {
            push_delay: Duration::from_millis(config.payment.push_delay_ms),
            success_rate: config.payment.success_rate,
        });

        Self {
            store,
            config,
            events: EventBus::default(),
            toasts: ToastQueue::default(),
            payments: Arc::new(PaymentOrchestrator::new(Arc::new(simulator))),
            theme: RwLock::new(Theme::Light),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read().expect("theme lock")
    }

    pub fn toggle_theme(&self) -> Theme {
        let mut theme = self.theme.write().expect("theme lock");
        *theme = theme.flipped();
        *theme
    }

    /// Snapshot the catalog into a filter store for the search view.
    pub async fn storefront(&self) -> Result<FilterStore, AppError> {
        let listings = self.store.list_listings().await.map_err(AppError::repo)?;
        Ok(FilterStore::new(listings))
    }

    pub fn publish_search(&self, criteria: &FilterCriteria, visible_count: usize) {
        self.events.publish(MarketEvent::SearchPerformed(SearchPerformedEvent {
            criteria: serde_json::to_value(criteria).unwrap_or_default(),
            visible_count,
            timestamp: Utc::now().timestamp(),
        }));
    }

    /// Open the reservation dialog for a short-stay listing.
    pub async fn open_reservation(&self, listing_id: Uuid) -> Result<ReservationSession, AppError> {
        let listing = self.require_listing(listing_id).await?;

        if listing.category != ListingCategory::ShortStay {
            return Err(AppError::NotBookable(format!(
                "{} is not a short-stay listing",
                listing.title
            )));
        }
        if !listing.is_active {
            return Err(AppError::NotBookable(format!("{} is unlisted", listing.title)));
        }

        Ok(ReservationSession::open(
            listing,
            Arc::clone(&self.store),
            Arc::clone(&self.payments),
            self.events.clone(),
            self.toasts.clone(),
        ))
    }

    /// File a request to view a property in person.
    pub async fn request_tour(
        &self,
        listing_id: Uuid,
        visitor_name: &str,
        phone: &str,
        preferred_date: NaiveDate,
        note: Option<String>,
    ) -> Result<TourRequest, AppError> {
        self.require_listing(listing_id).await?;

        let tour = match TourRequest::new(listing_id, visitor_name, phone, preferred_date, note) {
            Ok(tour) => tour,
            Err(err) => {
                self.toasts.error(err.to_string());
                return Err(err.into());
            }
        };

        self.store.save_tour(&tour).await.map_err(AppError::repo)?;
        self.events.publish(MarketEvent::TourRequested(TourRequestedEvent {
            tour_id: tour.id,
            listing_id,
            timestamp: Utc::now().timestamp(),
        }));
        self.toasts
            .success("Tour request sent. An agent will confirm shortly.");
        Ok(tour)
    }

    /// File a contact-form inquiry, optionally about a listing.
    pub async fn submit_inquiry(
        &self,
        listing_id: Option<Uuid>,
        sender_name: &str,
        sender_email: &str,
        body: &str,
    ) -> Result<Inquiry, AppError> {
        if let Some(id) = listing_id {
            self.require_listing(id).await?;
        }

        let inquiry = Inquiry::new(
            listing_id,
            sender_name.to_string(),
            sender_email.to_string(),
            body.to_string(),
        );
        self.store.save_inquiry(&inquiry).await.map_err(AppError::repo)?;
        self.events.publish(MarketEvent::InquiryReceived(InquiryReceivedEvent {
            inquiry_id: inquiry.id,
            listing_id,
            timestamp: Utc::now().timestamp(),
        }));
        self.toasts.success("Message sent. We will get back to you.");
        Ok(inquiry)
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(Arc::clone(&self.store))
    }

    /// Outbound WhatsApp link with the configured agency line and greeting.
    pub fn whatsapp_link_for(&self, listing: Option<&Listing>) -> String {
        whatsapp_link(
            &self.config.contact.whatsapp_msisdn,
            &self.config.contact.greeting,
            listing.map(|l| l.title.as_str()),
        )
    }

    pub fn shutdown(self) {
        info!("Makao engine shutting down");
    }

    async fn require_listing(&self, id: Uuid) -> Result<Listing, AppError> {
        self.store
            .get_listing(id)
            .await
            .map_err(AppError::repo)?
            .ok_or_else(|| AppError::NotFound(format!("listing {}", id)))
    }
}
