use makao_shared::models::events::{
    BookingConfirmedEvent, InquiryReceivedEvent, PaymentFailedEvent, SearchPerformedEvent,
    StkPushSentEvent, TourRequestedEvent,
};
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum MarketEvent {
    SearchPerformed(SearchPerformedEvent),
    StkPushSent(StkPushSentEvent),
    BookingConfirmed(BookingConfirmedEvent),
    PaymentFailed(PaymentFailedEvent),
    TourRequested(TourRequestedEvent),
    InquiryReceived(InquiryReceivedEvent),
}

impl MarketEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            MarketEvent::SearchPerformed(_) => "search_performed",
            MarketEvent::StkPushSent(_) => "stk_push_sent",
            MarketEvent::BookingConfirmed(_) => "booking_confirmed",
            MarketEvent::PaymentFailed(_) => "payment_failed",
            MarketEvent::TourRequested(_) => "tour_requested",
            MarketEvent::InquiryReceived(_) => "inquiry_received",
        }
    }
}

/// In-process event fan-out. Subscribers come and go; publishing with no
/// listeners is not an error.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<MarketEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MarketEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: MarketEvent) {
        debug!(kind = event.kind(), "publishing event");
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}
