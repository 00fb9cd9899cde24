//! Loan records and fines

use super::{Barcode, MemberId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monetary penalty owed on a late return.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub amount: f64,
}

impl Fine {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// A zero fine (returned on time or loan still open).
    pub fn none() -> Self {
        Self { amount: 0.0 }
    }
}

/// One borrow-to-return cycle for a copy.
///
/// Created when a borrow succeeds; closed (return date set, fine recorded)
/// when the copy comes back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub barcode: Barcode,
    pub member_id: MemberId,
    pub fine: Option<Fine>,
}

impl Loan {
    /// Open a new loan.
    pub fn new(
        barcode: impl Into<Barcode>,
        member_id: impl Into<MemberId>,
        created_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            due_date,
            returned_at: None,
            barcode: barcode.into(),
            member_id: member_id.into(),
            fine: None,
        }
    }

    /// Whether the copy has not come back yet.
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_loan_new_is_open() {
        let now = Utc::now();
        let loan = Loan::new("B001", "M1", now, now + Duration::days(14));
        assert!(loan.is_open());
        assert!(loan.fine.is_none());
    }

    #[test]
    fn test_closed_loan_not_open() {
        let now = Utc::now();
        let mut loan = Loan::new("B001", "M1", now, now + Duration::days(14));
        loan.returned_at = Some(now + Duration::days(10));
        assert!(!loan.is_open());
    }

    #[test]
    fn test_loan_serde_round_trip() {
        let now = Utc::now();
        let mut loan = Loan::new("B001", "M1", now, now + Duration::days(14));
        loan.fine = Some(Fine::new(3.0));
        let json = serde_json::to_string(&loan).unwrap();
        let back: Loan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, loan.id);
        assert_eq!(back.fine, Some(Fine::new(3.0)));
    }
}
