//! Payment history of a tracked collection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payout per NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payout date
    pub date: NaiveDate,
    /// Amount paid per NFT
    pub amount: Decimal,
}

impl Payment {
    /// Creates a new payment.
    #[must_use]
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

/// Chronological record of payouts for a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHistory {
    /// Recorded payments
    #[serde(default)]
    pub history: Vec<Payment>,
}

impl PaymentHistory {
    /// Creates a history from a list of payments.
    #[must_use]
    pub fn new(history: Vec<Payment>) -> Self {
        Self { history }
    }

    /// Returns true if no payment was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of recorded payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Sum of all payment amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.history.iter().map(|p| p.amount).sum()
    }

    /// Mean payment amount, or `None` for an empty history.
    #[must_use]
    pub fn mean_amount(&self) -> Option<Decimal> {
        if self.history.is_empty() {
            return None;
        }
        Some(self.total() / Decimal::from(self.history.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let history = PaymentHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.total(), Decimal::ZERO);
        assert_eq!(history.mean_amount(), None);
    }

    #[test]
    fn test_mean_and_total() {
        let history = PaymentHistory::new(vec![
            Payment::new(date(2024, 3, 1), dec!(2)),
            Payment::new(date(2024, 1, 1), dec!(1)),
            Payment::new(date(2024, 2, 1), dec!(3)),
        ]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.total(), dec!(6));
        assert_eq!(history.mean_amount(), Some(dec!(2)));
    }

    #[test]
    fn test_serde_dates() {
        let json = r#"{"history":[{"date":"2024-05-01","amount":1.5}]}"#;
        let parsed: PaymentHistory = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.history[0].date, date(2024, 5, 1));
        assert_eq!(parsed.history[0].amount, dec!(1.5));
    }
}
