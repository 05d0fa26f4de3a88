use chrono::{DateTime, Utc};
use makao_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    New,
    Read,
    Replied,
    Archived,
}

/// A message sent from the contact form, optionally about a specific listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub listing_id: Option<Uuid>,
    pub sender_name: String,
    pub sender_email: Masked<String>,
    pub body: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn new(listing_id: Option<Uuid>, sender_name: String, sender_email: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id,
            sender_name,
            sender_email: Masked::new(sender_email),
            body,
            status: InquiryStatus::New,
            created_at: Utc::now(),
        }
    }
}
