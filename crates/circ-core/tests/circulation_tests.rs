//! End-to-end circulation scenarios: borrow/return round trips, reservation
//! lifecycles, and the fine flow through `return_copy`.

mod common;

use circ_core::{CircError, Clock};
use circ_domain::{BookStatus, ReservationStatus};
use common::sample_library;

#[test]
fn borrow_then_return_round_trip_restores_available() {
    let (mut library, clock) = sample_library();

    library.borrow("B001", "M1").unwrap();
    assert_eq!(library.copy("B001").unwrap().status, BookStatus::Loaned);

    clock.advance_days(10);
    let fine = library.return_copy("B001", "M1").unwrap();
    assert_eq!(fine.amount, 0.0);

    let copy = library.copy("B001").unwrap();
    assert_eq!(copy.status, BookStatus::Available);
    assert!(copy.due_date.is_none());
    assert!(copy.borrower.is_none());
    assert!(copy.status_is_consistent());
}

#[test]
fn reserve_then_cancel_scenario() {
    let (mut library, _) = sample_library();

    // B001 available → reserving holds it immediately.
    let reservation = library.reserve("B001", "M1").unwrap();
    assert_eq!(reservation.status, ReservationStatus::Completed);
    assert_eq!(library.copy("B001").unwrap().status, BookStatus::Reserved);

    // Cancel → back to available, audit record kept as Canceled.
    library.cancel_reservation(reservation.id).unwrap();
    assert_eq!(library.copy("B001").unwrap().status, BookStatus::Available);
    assert_eq!(
        library.reservation(reservation.id).unwrap().status,
        ReservationStatus::Canceled
    );
}

#[test]
fn six_days_late_costs_three_dollars() {
    let (mut library, clock) = sample_library();

    let loan = library.borrow("B002", "M2").unwrap();
    assert_eq!(loan.due_date, clock.now() + chrono::Duration::days(14));

    clock.advance_days(20);
    let fine = library.return_copy("B002", "M2").unwrap();
    assert_eq!(fine.amount, 3.0);
}

#[test]
fn return_on_due_date_is_free() {
    let (mut library, clock) = sample_library();
    library.borrow("B002", "M2").unwrap();
    clock.advance_days(14);
    let fine = library.return_copy("B002", "M2").unwrap();
    assert_eq!(fine.amount, 0.0);
}

#[test]
fn reference_only_copy_cannot_circulate() {
    let (mut library, _) = sample_library();

    let err = library.borrow("R001", "M1").unwrap_err();
    assert!(matches!(err, CircError::InvalidState(_)));
    assert_eq!(library.copy("R001").unwrap().status, BookStatus::Available);

    let err = library.reserve("R001", "M1").unwrap_err();
    assert!(matches!(err, CircError::InvalidState(_)));
}

#[test]
fn reservation_queue_is_fifo_and_never_auto_promoted() {
    let (mut library, _) = sample_library();

    library.borrow("B010", "M1").unwrap();
    let first = library.reserve("B010", "M2").unwrap();
    let second = library.reserve("B010", "M1").unwrap();
    assert_eq!(first.status, ReservationStatus::Waiting);
    assert_eq!(second.status, ReservationStatus::Waiting);
    assert_eq!(
        library.copy("B010").unwrap().reservation_queue,
        vec![first.id, second.id]
    );

    // Return does not promote anyone; the queue is the caller's problem.
    library.return_copy("B010", "M1").unwrap();
    assert_eq!(library.copy("B010").unwrap().status, BookStatus::Available);
    assert_eq!(
        library.reservation(first.id).unwrap().status,
        ReservationStatus::Waiting
    );
}

#[test]
fn every_transition_keeps_copy_state_consistent() {
    let (mut library, clock) = sample_library();

    library.borrow("B001", "M1").unwrap();
    assert!(library.copy("B001").unwrap().status_is_consistent());

    let res = library.reserve("B001", "M2").unwrap();
    assert!(library.copy("B001").unwrap().status_is_consistent());

    clock.advance_days(3);
    library.return_copy("B001", "M1").unwrap();
    assert!(library.copy("B001").unwrap().status_is_consistent());

    library.cancel_reservation(res.id).unwrap();
    assert!(library.copy("B001").unwrap().status_is_consistent());
}

#[test]
fn unknown_ids_surface_not_found_errors() {
    let (mut library, _) = sample_library();
    assert!(matches!(
        library.return_copy("B404", "M1").unwrap_err(),
        CircError::CopyNotFound(_)
    ));
    assert!(matches!(
        library.borrow("B001", "M404").unwrap_err(),
        CircError::MemberNotFound(_)
    ));
    assert!(matches!(
        library.cancel_reservation(uuid::Uuid::new_v4()).unwrap_err(),
        CircError::ReservationNotFound(_)
    ));
}
