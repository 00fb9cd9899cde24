//! Reservation records

use super::{Barcode, MemberId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Queued behind other claims or behind an active loan.
    Waiting,
    /// Created but not yet resolved against the copy's status.
    Pending,
    /// The copy was available and is now held for this reservation.
    Completed,
    Canceled,
}

/// A member's claim on a specific copy.
///
/// Reservations are audit records: once created they are never deleted, only
/// moved to `Canceled`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub barcode: Barcode,
    pub member_id: MemberId,
}

impl Reservation {
    /// Create a pending reservation for a copy.
    pub fn new(
        barcode: impl Into<Barcode>,
        member_id: impl Into<MemberId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            status: ReservationStatus::Pending,
            barcode: barcode.into(),
            member_id: member_id.into(),
        }
    }

    /// Whether this reservation still holds a place in a copy's queue.
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Canceled
    }
}
