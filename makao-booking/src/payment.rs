use async_trait::async_trait;
use makao_core::payment::{ChargeRequest, PaymentError, PaymentGateway, PaymentOutcome};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Tuning for the simulated gateway. Production code reads these from
/// configuration; tests pin the probability to 1.0 or 0.0.
#[derive(Debug, Clone)]
pub struct StkSimulatorSettings {
    pub push_delay: Duration,
    pub success_rate: f64,
}

impl Default for StkSimulatorSettings {
    fn default() -> Self {
        Self {
            push_delay: Duration::from_secs(5),
            success_rate: 0.80,
        }
    }
}

/// Simulated mobile-money gateway: waits out the configured handset delay,
/// then draws the outcome. Stands in for a real STK-push integration.
pub struct StkPushSimulator {
    settings: StkSimulatorSettings,
}

impl StkPushSimulator {
    pub fn new(settings: StkSimulatorSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl PaymentGateway for StkPushSimulator {
    async fn push_payment(&self, request: &ChargeRequest) -> Result<PaymentOutcome, PaymentError> {
        if request.amount_ksh <= 0 {
            return Err(PaymentError::InvalidAmount(request.amount_ksh));
        }

        tracing::info!(
            listing_id = %request.listing_id,
            amount_ksh = request.amount_ksh,
            "simulated STK push sent"
        );

        tokio::time::sleep(self.settings.push_delay).await;

        let succeeded = rand::thread_rng().gen_bool(self.settings.success_rate.clamp(0.0, 1.0));
        if succeeded {
            Ok(PaymentOutcome::Succeeded {
                receipt: synth_receipt(),
            })
        } else {
            Ok(PaymentOutcome::Failed {
                reason: "Request declined or timed out on handset".to_string(),
            })
        }
    }
}

/// M-Pesa-style receipt code, ten uppercase characters.
fn synth_receipt() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(10)
        .collect()
}

/// Runs gateway pushes as explicit tasks with a cancellation path. Closing a
/// reservation dialog aborts its pending push through the returned handle.
pub struct PaymentOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentOrchestrator {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub fn start(&self, request: ChargeRequest) -> PendingPayment {
        let gateway = Arc::clone(&self.gateway);
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = &mut cancel_rx => {
                    tracing::info!(listing_id = %request.listing_id, "pending payment cancelled");
                    PaymentOutcome::Cancelled
                }
                result = gateway.push_payment(&request) => match result {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::warn!(error = %err, "payment push errored");
                        PaymentOutcome::Failed { reason: err.to_string() }
                    }
                }
            }
        });

        PendingPayment {
            cancel: Some(cancel_tx),
            task: Some(task),
        }
    }
}

/// Handle to an in-flight push. Dropping the handle cancels the push.
pub struct PendingPayment {
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<PaymentOutcome>>,
}

impl PendingPayment {
    /// Abort the push; resolution becomes `Cancelled`. Safe to call twice.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }

    /// Wait for the push to resolve.
    pub async fn outcome(mut self) -> PaymentOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(PaymentOutcome::Cancelled),
            None => PaymentOutcome::Cancelled,
        }
    }
}

impl Drop for PendingPayment {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}
