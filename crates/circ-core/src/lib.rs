//! circ-core: circulation state machine, catalog index, and search.
//!
//! The crate has four pieces:
//! - [`Catalog`]: the canonical book list plus derived lookup indexes
//! - [`Search`]: read-only exact + substring queries over a catalog
//! - [`Library`]: the circulation state machine (borrow, return, reserve,
//!   cancel) over copies, members, reservations, and loans
//! - [`calculate_fine`]: pure fine computation for a closed loan
//!
//! No persistence, no locking: callers serialize mutations per copy and
//! keep index rebuilds exclusive with reads.
#![feature(int_roundings)]

pub mod card;
pub mod catalog;
pub mod circulation;
pub mod clock;
pub mod error;
pub mod fine;
pub mod search;

pub use card::*;
pub use catalog::*;
pub use circulation::*;
pub use clock::*;
pub use error::*;
pub use fine::*;
pub use search::*;
