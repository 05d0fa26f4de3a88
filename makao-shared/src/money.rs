use serde::{Deserialize, Serialize};

/// Billing unit for a listing price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceUnit {
    PerNight,
    PerMonth,
    Total,
}

/// Format whole Kenyan shillings with thousands separators, e.g. "KSh 4,500".
pub fn format_ksh(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-KSh {}", grouped)
    } else {
        format!("KSh {}", grouped)
    }
}

/// Format a price with its billing unit suffix, e.g. "KSh 4,500 / night".
pub fn format_price(amount: i64, unit: PriceUnit) -> String {
    match unit {
        PriceUnit::PerNight => format!("{} / night", format_ksh(amount)),
        PriceUnit::PerMonth => format!("{} / month", format_ksh(amount)),
        PriceUnit::Total => format_ksh(amount),
    }
}
