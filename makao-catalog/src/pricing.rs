use chrono::NaiveDate;
use makao_shared::format_ksh;
use serde::{Deserialize, Serialize};

/// Whole nights between check-in and check-out. Negative when the dates are
/// reversed; callers gate on `> 0` before quoting.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Priced stay for a reservation: `total = nightly × nights`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub nightly_ksh: i64,
    pub total_ksh: i64,
}

impl StayQuote {
    pub fn compute(
        nightly_ksh: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, QuoteError> {
        let nights = nights_between(check_in, check_out);
        if nights <= 0 {
            return Err(QuoteError::EmptyStay { nights });
        }

        Ok(Self {
            check_in,
            check_out,
            nights: nights as u32,
            nightly_ksh,
            total_ksh: nightly_ksh * nights,
        })
    }

    pub fn total_display(&self) -> String {
        format_ksh(self.total_ksh)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Checkout must be after checkin ({nights} nights)")]
    EmptyStay { nights: i64 },
}
