//! Fee ledger arithmetic.
//!
//! `paid_fee` and `payment_history` move together: [`apply_payment`] is the
//! only function that changes either, and it returns a whole new record so a
//! rejected payment leaves the caller's copy untouched.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::records::{PaymentRecord, User};
use crate::types::new_id;

/// Where a student's account stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStatus {
    Settled,
    Outstanding,
    Overpaid,
}

/// `total_fee - paid_fee`. Negative after an overpayment.
pub fn compute_dues(user: &User) -> i64 {
    user.total_fee - user.paid_fee
}

/// Share of the fee already paid. Not clamped: overpayment reads above 100.
pub fn compute_paid_percent(user: &User) -> f64 {
    if user.total_fee <= 0 {
        return 0.0;
    }
    100.0 * user.paid_fee as f64 / user.total_fee as f64
}

pub fn fee_status(user: &User) -> FeeStatus {
    match compute_dues(user) {
        0 => FeeStatus::Settled,
        d if d > 0 => FeeStatus::Outstanding,
        _ => FeeStatus::Overpaid,
    }
}

/// Append a payment and bump the running total in one step.
///
/// Amounts must be positive; corrections are not entered as negative
/// payments.
pub fn apply_payment(
    user: &User,
    amount: i64,
    method: &str,
    date: NaiveDate,
) -> Result<User, ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::invalid(
            "amount",
            format!("Payment amount must be positive, got {amount}"),
        ));
    }
    if method.trim().is_empty() {
        return Err(ValidationError::missing(vec!["method"]));
    }
    let paid_fee = user.paid_fee.checked_add(amount).ok_or_else(|| {
        ValidationError::invalid("amount", "Payment overflows the running total")
    })?;

    let mut updated = user.clone();
    updated.payment_history.push(PaymentRecord {
        id: new_id(),
        amount,
        date,
        method: method.trim().to_string(),
    });
    updated.paid_fee = paid_fee;
    Ok(updated)
}

/// Whether `paid_fee` still equals the sum of the payment history.
pub fn ledger_is_consistent(user: &User) -> bool {
    let sum: i64 = user.payment_history.iter().map(|p| p.amount).sum();
    sum == user.paid_fee
}
