use crate::booking::Booking;
use chrono::NaiveDate;
use makao_core::identity::{ContactDetails, IdentityError};
use makao_core::payment::ChargeRequest;
use makao_catalog::{QuoteError, StayQuote};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStep {
    Dates,
    Contact,
    Payment,
    Confirmation,
}

/// Nested payment sub-status while on the payment step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentPhase {
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// The reservation wizard: a linear `Dates → Contact → Payment →
/// Confirmation` flow with validation gates between steps. One flow exists
/// per open reservation dialog; closing the dialog resets it.
#[derive(Debug)]
pub struct ReservationFlow {
    listing_id: Uuid,
    nightly_ksh: i64,
    listing_title: String,
    step: ReservationStep,
    payment: PaymentPhase,
    guests: u32,
    quote: Option<StayQuote>,
    contact: Option<ContactDetails>,
    booking: Option<Booking>,
}

impl ReservationFlow {
    pub fn open(listing_id: Uuid, listing_title: &str, nightly_ksh: i64) -> Self {
        Self {
            listing_id,
            nightly_ksh,
            listing_title: listing_title.to_string(),
            step: ReservationStep::Dates,
            payment: PaymentPhase::Idle,
            guests: 1,
            quote: None,
            contact: None,
            booking: None,
        }
    }

    pub fn listing_id(&self) -> Uuid {
        self.listing_id
    }

    pub fn step(&self) -> ReservationStep {
        self.step
    }

    pub fn payment_phase(&self) -> PaymentPhase {
        self.payment
    }

    pub fn quote(&self) -> Option<&StayQuote> {
        self.quote.as_ref()
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.guests = guests.max(1);
    }

    /// Dates → Contact. Both dates must be set and span at least one night;
    /// on violation the flow stays on the dates step.
    pub fn submit_dates(
        &mut self,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> Result<&StayQuote, ReservationError> {
        self.expect_step(ReservationStep::Dates, "CONTACT")?;

        let (check_in, check_out) = match (check_in, check_out) {
            (Some(ci), Some(co)) => (ci, co),
            _ => return Err(ReservationError::DatesMissing),
        };

        let quote = StayQuote::compute(self.nightly_ksh, check_in, check_out)?;
        self.step = ReservationStep::Contact;
        Ok(self.quote.insert(quote))
    }

    /// Contact → Payment. All three fields are required and the phone must be
    /// a Kenyan mobile number; on violation the flow stays on the contact step.
    pub fn submit_contact(
        &mut self,
        full_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<(), ReservationError> {
        self.expect_step(ReservationStep::Contact, "PAYMENT")?;

        let contact = ContactDetails::new(full_name, email, phone)?;
        self.contact = Some(contact);
        self.step = ReservationStep::Payment;
        self.payment = PaymentPhase::Idle;
        Ok(())
    }

    /// Fire the payment: `Idle`/`Failed` → `Processing`. Returns the charge
    /// to hand to the payment orchestrator.
    pub fn begin_payment(&mut self) -> Result<ChargeRequest, ReservationError> {
        self.expect_step(ReservationStep::Payment, "PROCESSING")?;
        if self.payment == PaymentPhase::Processing {
            return Err(ReservationError::PaymentInFlight);
        }

        let quote = self.quote.as_ref().ok_or(ReservationError::DatesMissing)?;
        let contact = self
            .contact
            .as_ref()
            .ok_or(ReservationError::MissingContact)?;

        self.payment = PaymentPhase::Processing;
        Ok(ChargeRequest {
            listing_id: self.listing_id,
            amount_ksh: quote.total_ksh,
            payer: contact.phone.clone(),
            account_reference: self.listing_title.clone(),
        })
    }

    /// `Processing` → `Succeeded`; auto-advances to the confirmation step and
    /// produces the booking record.
    pub fn payment_succeeded(&mut self, mpesa_receipt: String) -> Result<&Booking, ReservationError> {
        self.expect_processing("SUCCEEDED")?;

        let quote = self.quote.as_ref().ok_or(ReservationError::DatesMissing)?;
        let contact = self
            .contact
            .clone()
            .ok_or(ReservationError::MissingContact)?;

        let mut booking = Booking::from_quote(self.listing_id, contact, quote, self.guests);
        booking.confirm(mpesa_receipt);

        self.payment = PaymentPhase::Succeeded;
        self.step = ReservationStep::Confirmation;
        Ok(self.booking.insert(booking))
    }

    /// `Processing` → `Failed`; stays on the payment step so the guest can retry.
    pub fn payment_failed(&mut self) -> Result<(), ReservationError> {
        self.expect_processing("FAILED")?;
        self.payment = PaymentPhase::Failed;
        Ok(())
    }

    /// A cancelled push drops back to `Idle` without leaving the payment step.
    pub fn payment_cancelled(&mut self) -> Result<(), ReservationError> {
        self.expect_processing("IDLE")?;
        self.payment = PaymentPhase::Idle;
        Ok(())
    }

    /// Back navigation: `Contact → Dates`, `Payment → Contact`. Disallowed
    /// while a push is processing and from the confirmation step.
    pub fn back(&mut self) -> Result<ReservationStep, ReservationError> {
        if self.payment == PaymentPhase::Processing {
            return Err(ReservationError::PaymentInFlight);
        }

        self.step = match self.step {
            ReservationStep::Contact => ReservationStep::Dates,
            ReservationStep::Payment => {
                self.payment = PaymentPhase::Idle;
                ReservationStep::Contact
            }
            from => {
                return Err(ReservationError::InvalidTransition {
                    from: format!("{:?}", from),
                    to: "BACK".to_string(),
                })
            }
        };
        Ok(self.step)
    }

    /// Closing the dialog: discard everything and return to the initial state.
    pub fn reset(&mut self) {
        self.step = ReservationStep::Dates;
        self.payment = PaymentPhase::Idle;
        self.guests = 1;
        self.quote = None;
        self.contact = None;
        self.booking = None;
    }

    fn expect_step(&self, expected: ReservationStep, to: &str) -> Result<(), ReservationError> {
        if self.step != expected {
            return Err(ReservationError::InvalidTransition {
                from: format!("{:?}", self.step),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    fn expect_processing(&self, to: &str) -> Result<(), ReservationError> {
        if self.step != ReservationStep::Payment || self.payment != PaymentPhase::Processing {
            return Err(ReservationError::InvalidTransition {
                from: format!("{:?}/{:?}", self.step, self.payment),
                to: to.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Select both a check-in and a check-out date")]
    DatesMissing,

    #[error(transparent)]
    InvalidStay(#[from] QuoteError),

    #[error(transparent)]
    Contact(#[from] IdentityError),

    #[error("Contact details have not been captured")]
    MissingContact,

    #[error("A payment push is already processing")]
    PaymentInFlight,

    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
