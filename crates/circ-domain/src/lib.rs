//! Canonical domain models for the circ library suite
//!
//! This crate provides the data types shared by the circulation and catalog
//! logic:
//! - Book: A bibliographic record with its authors and physical copies
//! - BookItem: One barcoded physical copy of a Book
//! - Member: A library patron with borrowed copies and reservations
//! - Reservation: A member's queued claim on a copy
//! - Loan: One borrow-to-return cycle, with its computed fine
//! - Person, Address, Rack, LibraryCard: Supporting value types

pub mod author;
pub mod book;
pub mod item;
pub mod loan;
pub mod member;
pub mod reservation;

pub use author::*;
pub use book::*;
pub use item::*;
pub use loan::*;
pub use member::*;
pub use reservation::*;

/// Barcode of a physical copy.
pub type Barcode = String;

/// Member account identifier.
pub type MemberId = String;
