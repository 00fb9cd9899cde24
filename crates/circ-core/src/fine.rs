//! Fine computation
//!
//! Pure function over a loan's due and return dates. Kept separate from the
//! state machine so it can be recomputed for any closed loan at any time.

use chrono::Duration;
use circ_domain::Loan;

/// Fine charged per late day, in currency units.
pub const DAILY_FINE_RATE: f64 = 0.50;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Amount owed on a loan.
///
/// Zero while the loan is open or when the copy came back on or before the
/// due date. A partial late day counts as a full day. Never negative.
pub fn calculate_fine(loan: &Loan) -> f64 {
    let Some(returned_at) = loan.returned_at else {
        return 0.0;
    };
    let late: Duration = returned_at - loan.due_date;
    let late_seconds = late.num_seconds();
    if late_seconds <= 0 {
        return 0.0;
    }
    let late_days = late_seconds.div_ceil(SECONDS_PER_DAY);
    late_days as f64 * DAILY_FINE_RATE
}
