//! Error types for payment processing.

use thiserror::Error;

/// Errors that can occur before a payment reaches a backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// Amounts below zero are rejected rather than clamped.
    #[error("Negative payment amount: {0}")]
    NegativeAmount(f64),

    /// NaN and infinities cannot be charged.
    #[error("Payment amount is not a finite number")]
    NonFiniteAmount,
}
