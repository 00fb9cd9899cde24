//! Physical copy (BookItem) and shelf placement

use super::{Barcode, MemberId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical format of a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookFormat {
    #[default]
    Hardcover,
    Paperback,
    Audiobook,
    Ebook,
    Newspaper,
    Magazine,
    Journal,
}

/// Circulation status of a copy.
///
/// `Lost` is terminal as far as circulation is concerned; recovery is a
/// manual, out-of-band correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Reserved,
    Loaned,
    Lost,
}

/// A shelf location within a library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    pub number: u32,
    pub location: String,
}

impl Rack {
    pub fn new(number: u32, location: impl Into<String>) -> Self {
        Self {
            number,
            location: location.into(),
        }
    }
}

/// One physical, barcoded copy of a book.
///
/// Status is kept consistent with the borrower and reservation fields by the
/// circulation layer: `Loaned` always has a borrower, `Reserved` always has a
/// non-empty reservation queue and no borrower.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookItem {
    pub barcode: Barcode,
    pub format: BookFormat,
    /// Reference-only copies never leave the building: not loanable, not
    /// reservable.
    pub reference_only: bool,
    pub price: f64,
    pub date_of_purchase: Option<NaiveDate>,
    pub publication_date: Option<NaiveDate>,
    pub rack: Option<Rack>,
    pub status: BookStatus,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub borrower: Option<MemberId>,
    /// Pending reservations, FIFO by creation order.
    pub reservation_queue: Vec<Uuid>,
}

impl BookItem {
    /// Create a new available copy with default format.
    pub fn new(barcode: impl Into<Barcode>) -> Self {
        Self {
            barcode: barcode.into(),
            format: BookFormat::default(),
            reference_only: false,
            price: 0.0,
            date_of_purchase: None,
            publication_date: None,
            rack: None,
            status: BookStatus::default(),
            borrowed_at: None,
            due_date: None,
            borrower: None,
            reservation_queue: Vec::new(),
        }
    }

    /// Builder method to set the format
    pub fn with_format(mut self, format: BookFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to mark the copy reference-only
    pub fn reference_only(mut self) -> Self {
        self.reference_only = true;
        self
    }

    /// Builder method to set the purchase price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builder method to set the publication date
    pub fn with_publication_date(mut self, date: NaiveDate) -> Self {
        self.publication_date = Some(date);
        self
    }

    /// Builder method to place the copy on a rack
    pub fn with_rack(mut self, rack: Rack) -> Self {
        self.rack = Some(rack);
        self
    }

    /// Whether this copy may be checked out right now.
    pub fn is_checkout_allowed(&self) -> bool {
        !self.reference_only && self.status == BookStatus::Available
    }

    /// Whether status agrees with the borrower and reservation fields.
    ///
    /// `Loaned` iff a borrower is set; `Reserved` iff the queue is non-empty
    /// and no borrower is set.
    pub fn status_is_consistent(&self) -> bool {
        match self.status {
            BookStatus::Loaned => self.borrower.is_some(),
            BookStatus::Reserved => self.borrower.is_none() && !self.reservation_queue.is_empty(),
            BookStatus::Available | BookStatus::Lost => self.borrower.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copy_is_available() {
        let item = BookItem::new("B001");
        assert_eq!(item.status, BookStatus::Available);
        assert!(item.is_checkout_allowed());
        assert!(item.status_is_consistent());
    }

    #[test]
    fn test_reference_only_copy_not_loanable() {
        let item = BookItem::new("B001").reference_only();
        assert!(!item.is_checkout_allowed());
    }

    #[test]
    fn test_loaned_without_borrower_is_inconsistent() {
        let mut item = BookItem::new("B001");
        item.status = BookStatus::Loaned;
        assert!(!item.status_is_consistent());
        item.borrower = Some("M1".to_string());
        assert!(item.status_is_consistent());
    }

    #[test]
    fn test_reserved_requires_queue_and_no_borrower() {
        let mut item = BookItem::new("B001");
        item.status = BookStatus::Reserved;
        assert!(!item.status_is_consistent());
        item.reservation_queue.push(Uuid::new_v4());
        assert!(item.status_is_consistent());
        item.borrower = Some("M1".to_string());
        assert!(!item.status_is_consistent());
    }
}
