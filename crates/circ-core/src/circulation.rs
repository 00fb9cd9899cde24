//! Circulation state machine
//!
//! [`Library`] owns the catalog, the member registry, the reservation audit
//! log, and the loan ledger, and runs every copy through its lifecycle:
//! available → loaned/reserved → available, with `Lost` as a terminal state
//! cleared only by manual correction.
//!
//! All operations are synchronous and local. Callers must serialize mutating
//! operations per copy; the state machine itself takes `&mut self` and holds
//! no locks.

use crate::{calculate_fine, CardNumbers, CircError, Clock, SystemClock, UuidCardNumbers};
use crate::Catalog;
use chrono::Duration;
use circ_domain::{
    AccountStatus, Barcode, Book, BookItem, BookStatus, Fine, LibraryCard, Loan, Member, MemberId,
    Person, Reservation, ReservationStatus,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Fixed loan period: due date is this many days after the borrow date.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// A library: catalog, members, reservations, loans, and the circulation
/// operations tying them together.
pub struct Library {
    pub name: String,
    catalog: Catalog,
    members: HashMap<MemberId, Member>,
    /// Audit log of every reservation ever made. Entries are never removed,
    /// only moved to `Canceled`.
    reservations: HashMap<Uuid, Reservation>,
    loans: Vec<Loan>,
    /// barcode → (book position, item position) into the catalog.
    locations: HashMap<Barcode, (usize, usize)>,
    clock: Box<dyn Clock>,
    cards: Box<dyn CardNumbers>,
}

impl Library {
    /// Create an empty library with the system clock and UUID card numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: Catalog::new(),
            members: HashMap::new(),
            reservations: HashMap::new(),
            loans: Vec::new(),
            locations: HashMap::new(),
            clock: Box::new(SystemClock),
            cards: Box::new(UuidCardNumbers),
        }
    }

    /// Builder method to inject a clock (tests use [`crate::FixedClock`]).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builder method to inject a card-number generator.
    pub fn with_card_numbers(mut self, cards: impl CardNumbers + 'static) -> Self {
        self.cards = Box::new(cards);
        self
    }

    // --- catalog ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access for bulk edits followed by
    /// `rebuild_indexes()`. Adding or removing copies through this handle
    /// bypasses barcode registration; use [`Library::add_book`] and
    /// [`Library::add_book_item`] for that.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Add a book (with any copies it already carries) to the catalog and
    /// register each copy's barcode.
    pub fn add_book(&mut self, book: Book) -> Result<usize, CircError> {
        for item in &book.items {
            if self.locations.contains_key(&item.barcode) {
                return Err(CircError::InvalidState(format!(
                    "barcode already registered: {}",
                    item.barcode
                )));
            }
        }
        let index = self.catalog.add_book(book);
        let barcodes: Vec<(Barcode, usize)> = self.catalog.books()[index]
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.barcode.clone(), i))
            .collect();
        for (barcode, item_index) in barcodes {
            self.locations.insert(barcode, (index, item_index));
        }
        Ok(index)
    }

    /// Add a copy to an already-cataloged book.
    pub fn add_book_item(&mut self, isbn: &str, item: BookItem) -> Result<(), CircError> {
        if self.locations.contains_key(&item.barcode) {
            return Err(CircError::InvalidState(format!(
                "barcode already registered: {}",
                item.barcode
            )));
        }
        let book_index = self
            .catalog
            .find_by_isbn(isbn)
            .ok_or_else(|| CircError::BookNotFound(isbn.to_string()))?;
        let barcode = item.barcode.clone();
        let book = self
            .catalog
            .book_mut(book_index)
            .ok_or_else(|| CircError::BookNotFound(isbn.to_string()))?;
        let item_index = book.items.len();
        book.add_item(item);
        self.locations.insert(barcode, (book_index, item_index));
        Ok(())
    }

    /// Look up a copy by barcode.
    pub fn copy(&self, barcode: &str) -> Option<&BookItem> {
        let &(book, item) = self.locations.get(barcode)?;
        self.catalog.book(book)?.items.get(item)
    }

    fn copy_mut(&mut self, barcode: &str) -> Result<&mut BookItem, CircError> {
        let &(book, item) = self
            .locations
            .get(barcode)
            .ok_or_else(|| CircError::CopyNotFound(barcode.to_string()))?;
        self.catalog
            .book_mut(book)
            .and_then(|b| b.items.get_mut(item))
            .ok_or_else(|| CircError::CopyNotFound(barcode.to_string()))
    }

    // --- members ---

    /// Register a member and issue a library card.
    pub fn register_member(
        &mut self,
        id: impl Into<MemberId>,
        person: Person,
    ) -> Result<LibraryCard, CircError> {
        let id = id.into();
        if self.members.contains_key(&id) {
            return Err(CircError::InvalidState(format!(
                "member already registered: {id}"
            )));
        }
        let now = self.clock.now();
        let card = LibraryCard {
            card_number: self.cards.next(),
            issued_at: now,
            active: true,
        };
        let mut member = Member::new(id.clone(), person, now);
        member.card = Some(card.clone());
        tracing::info!(member = %id, card = %card.card_number, "member registered");
        self.members.insert(id, member);
        Ok(card)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// Blacklist an active member. Blacklisted members cannot borrow.
    pub fn block_member(&mut self, id: &str) -> Result<(), CircError> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| CircError::MemberNotFound(id.to_string()))?;
        if member.status != AccountStatus::Active {
            return Err(CircError::InvalidState(format!(
                "member {id} is not active"
            )));
        }
        member.status = AccountStatus::Blacklisted;
        tracing::info!(member = %id, "member blacklisted");
        Ok(())
    }

    /// Restore a blacklisted member to active standing.
    pub fn unblock_member(&mut self, id: &str) -> Result<(), CircError> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| CircError::MemberNotFound(id.to_string()))?;
        if member.status != AccountStatus::Blacklisted {
            return Err(CircError::InvalidState(format!(
                "member {id} is not blacklisted"
            )));
        }
        member.status = AccountStatus::Active;
        tracing::info!(member = %id, "member unblocked");
        Ok(())
    }

    // --- circulation ---

    /// Check a copy out to a member.
    ///
    /// Fails without any state change if the member is unknown or not in
    /// good standing, or if the copy is unknown, reference-only, or not
    /// available. On success the copy is `Loaned` with a due date
    /// [`LOAN_PERIOD_DAYS`] out, and an open [`Loan`] is recorded.
    pub fn borrow(&mut self, barcode: &str, member_id: &str) -> Result<Loan, CircError> {
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| CircError::MemberNotFound(member_id.to_string()))?;
        if !member.is_active() {
            return Err(CircError::NotPermitted(format!(
                "member {member_id} is not in good standing"
            )));
        }

        let now = self.clock.now();
        let due_date = now + Duration::days(LOAN_PERIOD_DAYS);

        let copy = self.copy_mut(barcode)?;
        if copy.reference_only {
            return Err(CircError::InvalidState(format!(
                "copy {barcode} is reference-only"
            )));
        }
        if copy.status != BookStatus::Available {
            return Err(CircError::InvalidState(format!(
                "copy {barcode} is {:?}",
                copy.status
            )));
        }
        copy.status = BookStatus::Loaned;
        copy.borrowed_at = Some(now);
        copy.due_date = Some(due_date);
        copy.borrower = Some(member_id.to_string());

        // Validated above; the member is still there.
        if let Some(member) = self.members.get_mut(member_id) {
            member.borrowed.push(barcode.to_string());
            member.total_checked_out += 1;
        }

        let loan = Loan::new(barcode, member_id, now, due_date);
        self.loans.push(loan.clone());
        tracing::info!(copy = %barcode, member = %member_id, due = %due_date, "copy loaned");
        Ok(loan)
    }

    /// Return a copy held by `member_id`.
    ///
    /// Fails if that member does not currently hold the copy. On success the
    /// copy is `Available` again with borrower and dates cleared, the open
    /// loan is closed, and the computed fine is recorded on it and returned.
    /// Waiting reservations are *not* promoted; callers re-evaluate the
    /// queue themselves.
    pub fn return_copy(&mut self, barcode: &str, member_id: &str) -> Result<Fine, CircError> {
        if !self.members.contains_key(member_id) {
            return Err(CircError::MemberNotFound(member_id.to_string()));
        }
        if !self.locations.contains_key(barcode) {
            return Err(CircError::CopyNotFound(barcode.to_string()));
        }
        let loan_index = self
            .loans
            .iter()
            .rposition(|l| l.barcode == barcode && l.member_id == member_id && l.is_open())
            .ok_or_else(|| {
                CircError::InvalidState(format!(
                    "no open loan of copy {barcode} to member {member_id}"
                ))
            })?;
        let now = self.clock.now();

        let copy = self.copy_mut(barcode)?;
        if copy.borrower.as_deref() != Some(member_id) {
            return Err(CircError::InvalidState(format!(
                "copy {barcode} is not held by member {member_id}"
            )));
        }
        copy.status = BookStatus::Available;
        copy.borrowed_at = None;
        copy.due_date = None;
        copy.borrower = None;

        if let Some(member) = self.members.get_mut(member_id) {
            member.borrowed.retain(|b| b != barcode);
            member.total_checked_out = member.total_checked_out.saturating_sub(1);
        }

        let loan = &mut self.loans[loan_index];
        loan.returned_at = Some(now);
        let fine = Fine::new(calculate_fine(loan));
        loan.fine = Some(fine);
        tracing::info!(copy = %barcode, member = %member_id, fine = fine.amount, "copy returned");
        Ok(fine)
    }

    /// Reserve a copy for a member.
    ///
    /// Any non-reference-only copy can be reserved. If the copy is available
    /// it is held immediately (`Reserved` / reservation `Completed`);
    /// otherwise the reservation queues as `Waiting` in FIFO order. Waiting
    /// reservations are never auto-promoted by this core.
    pub fn reserve(&mut self, barcode: &str, member_id: &str) -> Result<Reservation, CircError> {
        if !self.members.contains_key(member_id) {
            return Err(CircError::MemberNotFound(member_id.to_string()));
        }
        let now = self.clock.now();

        let copy = self.copy_mut(barcode)?;
        if copy.reference_only {
            return Err(CircError::InvalidState(format!(
                "copy {barcode} is reference-only"
            )));
        }
        let mut reservation = Reservation::new(barcode, member_id, now);
        copy.reservation_queue.push(reservation.id);
        if copy.status == BookStatus::Available {
            copy.status = BookStatus::Reserved;
            reservation.status = ReservationStatus::Completed;
        } else {
            reservation.status = ReservationStatus::Waiting;
        }

        if let Some(member) = self.members.get_mut(member_id) {
            member.reservations.push(reservation.id);
        }

        tracing::info!(
            copy = %barcode,
            member = %member_id,
            status = ?reservation.status,
            "copy reserved"
        );
        self.reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    /// Cancel a reservation that still holds a place in its copy's queue.
    ///
    /// The reservation leaves the copy's queue and the member's list; the
    /// audit record stays, marked `Canceled`. A reserved copy whose queue
    /// empties becomes available again.
    pub fn cancel_reservation(&mut self, id: Uuid) -> Result<(), CircError> {
        let reservation = self
            .reservations
            .get(&id)
            .ok_or(CircError::ReservationNotFound(id))?;
        if !reservation.is_active() {
            return Err(CircError::InvalidState(format!(
                "reservation {id} is already canceled"
            )));
        }
        let barcode = reservation.barcode.clone();
        let member_id = reservation.member_id.clone();

        let copy = self.copy_mut(&barcode)?;
        copy.reservation_queue.retain(|&r| r != id);
        if copy.status == BookStatus::Reserved && copy.reservation_queue.is_empty() {
            copy.status = BookStatus::Available;
        }

        if let Some(member) = self.members.get_mut(&member_id) {
            member.reservations.retain(|&r| r != id);
        }

        if let Some(reservation) = self.reservations.get_mut(&id) {
            reservation.status = ReservationStatus::Canceled;
        }
        tracing::info!(copy = %barcode, member = %member_id, "reservation canceled");
        Ok(())
    }

    /// Look up a reservation in the audit log.
    pub fn reservation(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// The loan ledger, open and closed, in creation order.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }
}
