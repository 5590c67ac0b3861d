//! # Adapter Pattern: Payments
//!
//! Two unrelated backends ([`PayPal`], [`Stripe`]) are wrapped by adapters that
//! implement the shared [`PaymentProcessor`] trait. [`purchase`] only talks to the
//! trait and cannot tell the backends apart.
//!
//! ## Validation
//!
//! `purchase` takes a raw `f64` and validates it into an [`Amount`] before any
//! backend sees it. Negative, NaN and infinite values fail with a
//! [`PaymentError`] and write nothing to the console.
//!
//! ```rust
//! use pattern_recipe::console::RecordingConsole;
//! use pattern_recipe::payment::{purchase, PaymentError, Stripe, StripeAdapter};
//!
//! let mut console = RecordingConsole::new();
//! let stripe = StripeAdapter::new(Stripe::new());
//!
//! purchase(&stripe, 150.0, &mut console).unwrap();
//! assert_eq!(console.lines(), ["Paid $150 via Stripe"]);
//!
//! let err = purchase(&stripe, -5.0, &mut console).unwrap_err();
//! assert_eq!(err, PaymentError::NegativeAmount(-5.0));
//! assert_eq!(console.lines().len(), 1);
//! ```

pub mod adapter;
pub mod amount;
pub mod error;
pub mod gateways;

pub use adapter::*;
pub use amount::*;
pub use error::*;
pub use gateways::*;

use crate::console::Console;
use tracing::{info, instrument, warn};

/// Validates `amount` and charges it through `processor`.
#[instrument(skip(processor, console), fields(backend = processor.backend_name()))]
pub fn purchase(
    processor: &dyn PaymentProcessor,
    amount: f64,
    console: &mut dyn Console,
) -> Result<(), PaymentError> {
    let amount = Amount::new(amount).inspect_err(|e| warn!(error = %e, "Payment rejected"))?;

    processor.process_payment(amount, console);
    info!(%amount, "Payment processed");
    Ok(())
}
