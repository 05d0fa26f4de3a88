use crate::identity::Msisdn;
use async_trait::async_trait;
use makao_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a mobile-money push once the payer has responded (or not).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "outcome")]
pub enum PaymentOutcome {
    Succeeded { receipt: String },
    Failed { reason: String },
    Cancelled,
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Succeeded { .. })
    }
}

/// A request to charge a payer's mobile wallet for a stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub listing_id: Uuid,
    pub amount_ksh: i64,
    pub payer: Masked<Msisdn>,
    /// Shown on the payer's prompt, e.g. the listing title.
    pub account_reference: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Charge amount must be positive, got {0}")]
    InvalidAmount(i64),

    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),
}

/// Gateway seam for mobile-money checkout. The production implementation would
/// talk to a payment provider; this system ships a timed simulator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Send a payment prompt to the payer's phone and wait for resolution.
    async fn push_payment(&self, request: &ChargeRequest) -> Result<PaymentOutcome, PaymentError>;
}
