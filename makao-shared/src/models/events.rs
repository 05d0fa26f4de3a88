use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchPerformedEvent {
    pub criteria: serde_json::Value,
    pub visible_count: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct StkPushSentEvent {
    pub listing_id: Uuid,
    pub amount_ksh: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub listing_id: Uuid,
    pub reference: String,
    pub total_ksh: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PaymentFailedEvent {
    pub listing_id: Uuid,
    pub amount_ksh: i64,
    pub reason: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct TourRequestedEvent {
    pub tour_id: Uuid,
    pub listing_id: Uuid,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct InquiryReceivedEvent {
    pub inquiry_id: Uuid,
    pub listing_id: Option<Uuid>,
    pub timestamp: i64,
}
