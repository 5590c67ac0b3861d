//! Third-party payment backends.
//!
//! These two services model SDKs we don't control: each one spells the same
//! operation differently (`pay` vs `make_payment`). The adapters in
//! [`adapter`](super::adapter) hide that difference.

use super::amount::Amount;
use crate::console::Console;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PayPal;

impl PayPal {
    pub fn new() -> Self {
        Self
    }

    pub fn pay(&self, amount: Amount, console: &mut dyn Console) {
        debug!(%amount, "PayPal charge");
        console.write_line(&format!("Paid ${amount} via PayPal"));
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stripe;

impl Stripe {
    pub fn new() -> Self {
        Self
    }

    pub fn make_payment(&self, amount: Amount, console: &mut dyn Console) {
        debug!(%amount, "Stripe charge");
        console.write_line(&format!("Paid ${amount} via Stripe"));
    }
}
