//! Member account and supporting value types

use super::{Barcode, MemberId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Postal address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

/// Contact details for a member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub address: Option<Address>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Person {
    /// Create a person with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: None,
            phone: None,
        }
    }

    /// Builder method to add an email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder method to add a phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Standing of a member account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    #[default]
    Active,
    Closed,
    Canceled,
    Blacklisted,
}

/// Card issued to a member on registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryCard {
    pub card_number: String,
    pub issued_at: DateTime<Utc>,
    pub active: bool,
}

/// A library patron.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub person: Person,
    pub status: AccountStatus,
    pub joined_at: DateTime<Utc>,
    pub card: Option<LibraryCard>,
    /// Number of copies currently checked out. Always equals
    /// `borrowed.len()`.
    pub total_checked_out: u32,
    /// Barcodes of copies currently held by this member.
    pub borrowed: Vec<Barcode>,
    /// Ids of this member's reservations that have not been canceled.
    pub reservations: Vec<Uuid>,
}

impl Member {
    /// Create a new active member.
    pub fn new(id: impl Into<MemberId>, person: Person, joined_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            person,
            status: AccountStatus::default(),
            joined_at,
            card: None,
            total_checked_out: 0,
            borrowed: Vec::new(),
            reservations: Vec::new(),
        }
    }

    /// Whether the account is in good standing for circulation.
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
