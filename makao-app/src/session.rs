use crate::error::AppError;
use crate::toast::ToastQueue;
use chrono::{NaiveDate, Utc};
use makao_booking::payment::{PaymentOrchestrator, PendingPayment};
use makao_booking::repository::BookingRepository;
use makao_booking::reservation::{ReservationFlow, ReservationStep};
use makao_catalog::Listing;
use makao_core::payment::PaymentOutcome;
use makao_shared::models::events::{BookingConfirmedEvent, PaymentFailedEvent, StkPushSentEvent};
use makao_store::{EventBus, MarketEvent, MemoryStore};
use std::sync::Arc;

/// One open reservation dialog: the wizard plus its pending payment, toasts
/// and persistence. Closing the session aborts an in-flight push and resets
/// the draft.
pub struct ReservationSession {
    listing: Listing,
    flow: ReservationFlow,
    store: Arc<MemoryStore>,
    payments: Arc<PaymentOrchestrator>,
    events: EventBus,
    toasts: ToastQueue,
    pending: Option<PendingPayment>,
}

impl ReservationSession {
    pub(crate) fn open(
        listing: Listing,
        store: Arc<MemoryStore>,
        payments: Arc<PaymentOrchestrator>,
        events: EventBus,
        toasts: ToastQueue,
    ) -> Self {
        let flow = ReservationFlow::open(listing.id, &listing.title, listing.price_ksh);
        Self {
            listing,
            flow,
            store,
            payments,
            events,
            toasts,
            pending: None,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn flow(&self) -> &ReservationFlow {
        &self.flow
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.flow.set_guests(guests);
    }

    pub fn submit_dates(
        &mut self,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        if let Err(err) = self.flow.submit_dates(check_in, check_out) {
            self.toasts.error(err.to_string());
            return Err(err.into());
        }
        Ok(())
    }

    pub fn submit_contact(
        &mut self,
        full_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<(), AppError> {
        if let Err(err) = self.flow.submit_contact(full_name, email, phone) {
            self.toasts.error(err.to_string());
            return Err(err.into());
        }
        Ok(())
    }

    pub fn back(&mut self) -> Result<ReservationStep, AppError> {
        Ok(self.flow.back()?)
    }

    /// Fire the STK push for the quoted total.
    pub fn pay(&mut self) -> Result<(), AppError> {
        let charge = match self.flow.begin_payment() {
            Ok(charge) => charge,
            Err(err) => {
                self.toasts.error(err.to_string());
                return Err(err.into());
            }
        };

        self.events.publish(MarketEvent::StkPushSent(StkPushSentEvent {
            listing_id: charge.listing_id,
            amount_ksh: charge.amount_ksh,
            timestamp: Utc::now().timestamp(),
        }));
        self.toasts
            .info("Payment request sent to your phone. Enter your M-Pesa PIN to complete.");

        self.pending = Some(self.payments.start(charge));
        Ok(())
    }

    /// Wait for the in-flight push to resolve and advance the wizard.
    pub async fn await_payment(&mut self) -> Result<PaymentOutcome, AppError> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| AppError::NotFound("no payment in flight".to_string()))?;

        let outcome = pending.outcome().await;
        match &outcome {
            PaymentOutcome::Succeeded { receipt } => {
                let booking = self.flow.payment_succeeded(receipt.clone())?;
                self.store
                    .save_booking(booking)
                    .await
                    .map_err(AppError::repo)?;
                self.events.publish(MarketEvent::BookingConfirmed(BookingConfirmedEvent {
                    booking_id: booking.id,
                    listing_id: booking.listing_id,
                    reference: booking.reference.clone(),
                    total_ksh: booking.total_ksh,
                    timestamp: Utc::now().timestamp(),
                }));
                self.toasts.success(format!(
                    "Booking confirmed. Your reference is {}.",
                    booking.reference
                ));
            }
            PaymentOutcome::Failed { reason } => {
                self.flow.payment_failed()?;
                self.events.publish(MarketEvent::PaymentFailed(PaymentFailedEvent {
                    listing_id: self.listing.id,
                    amount_ksh: self.flow.quote().map(|q| q.total_ksh).unwrap_or_default(),
                    reason: reason.clone(),
                    timestamp: Utc::now().timestamp(),
                }));
                self.toasts
                    .error(format!("Payment failed: {}. You can try again.", reason));
            }
            PaymentOutcome::Cancelled => {
                // The dialog was closed mid-push; nothing to persist.
                let _ = self.flow.payment_cancelled();
            }
        }

        Ok(outcome)
    }

    /// Close the dialog: abort any pending push and discard the draft.
    pub fn close(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
        self.flow.reset();
    }
}
