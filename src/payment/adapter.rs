//! # Payment Adapters
//!
//! [`PaymentProcessor`] is the one capability the rest of the application relies
//! on. Each adapter owns exactly one backend, bound at construction, and satisfies
//! the capability by forwarding the amount to the backend's own method. The
//! backend writes its own confirmation line.
//!
//! Adapters take `&self`, so a backend is never mutated through its adapter.

use super::amount::Amount;
use super::gateways::{PayPal, Stripe};
use crate::console::Console;

/// The common payment capability.
pub trait PaymentProcessor {
    /// Charges `amount` through the underlying backend.
    fn process_payment(&self, amount: Amount, console: &mut dyn Console);

    /// Name of the backend (e.g. `"PayPal"`).
    fn backend_name(&self) -> &'static str;
}

/// Exposes [`PayPal::pay`] as a [`PaymentProcessor`].
#[derive(Debug, Clone)]
pub struct PayPalAdapter {
    paypal: PayPal,
}

impl PayPalAdapter {
    pub fn new(paypal: PayPal) -> Self {
        Self { paypal }
    }

    /// Read-only access to the wrapped backend.
    pub fn inner(&self) -> &PayPal {
        &self.paypal
    }

    pub fn into_inner(self) -> PayPal {
        self.paypal
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn process_payment(&self, amount: Amount, console: &mut dyn Console) {
        self.paypal.pay(amount, console);
    }

    fn backend_name(&self) -> &'static str {
        "PayPal"
    }
}

/// Exposes [`Stripe::make_payment`] as a [`PaymentProcessor`].
#[derive(Debug, Clone)]
pub struct StripeAdapter {
    stripe: Stripe,
}

impl StripeAdapter {
    pub fn new(stripe: Stripe) -> Self {
        Self { stripe }
    }

    /// Read-only access to the wrapped backend.
    pub fn inner(&self) -> &Stripe {
        &self.stripe
    }

    pub fn into_inner(self) -> Stripe {
        self.stripe
    }
}

impl PaymentProcessor for StripeAdapter {
    fn process_payment(&self, amount: Amount, console: &mut dyn Console) {
        self.stripe.make_payment(amount, console);
    }

    fn backend_name(&self) -> &'static str {
        "Stripe"
    }
}
