//! # Demonstration Runner
//!
//! Runs the three pattern walkthroughs back to back against one [`Console`]. This
//! is what the binary executes; the integration tests run it against a
//! [`RecordingConsole`](crate::console::RecordingConsole) and compare every line.
//!
//! ```text
//! Ordering Margherita Pizza...
//! Preparing Margherita Pizza
//! ...
//! Books in the library:
//! Pride and Prejudice
//! ```

use crate::console::Console;
use crate::library::{print_books, Book, BookCollection, CursorError, Library};
use crate::payment::{
    purchase, PayPal, PayPalAdapter, PaymentError, PaymentProcessor, Stripe, StripeAdapter,
};
use crate::pizza::{order_pizza, PizzaKind};
use thiserror::Error;
use tracing::{info, info_span};

/// Titles shelved by [`library_demo`], in insertion order.
pub const LIBRARY_TITLES: [&str; 4] = [
    "The Great Gatsby",
    "To Kill a Mockingbird",
    "1984",
    "Pride and Prejudice",
];

/// Errors surfaced by [`run`].
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Cursor(#[from] CursorError),
}

/// Runs every demonstration in order.
pub fn run(console: &mut dyn Console) -> Result<(), DemoError> {
    info!("Starting pattern demonstrations");

    info_span!("factory").in_scope(|| pizza_demo(console));
    info_span!("adapter").in_scope(|| payment_demo(console))?;
    info_span!("iterator").in_scope(|| library_demo(console))?;

    info!("All demonstrations completed");
    Ok(())
}

/// Orders one pizza of every kind.
pub fn pizza_demo(console: &mut dyn Console) {
    for kind in PizzaKind::ALL {
        console.write_line(&format!("Ordering {kind}..."));
        order_pizza(kind.factory().as_ref(), console);
    }
}

/// Charges $100 through PayPal and $150 through Stripe.
pub fn payment_demo(console: &mut dyn Console) -> Result<(), PaymentError> {
    let paypal = PayPalAdapter::new(PayPal::new());
    let stripe = StripeAdapter::new(Stripe::new());

    let payments: [(&dyn PaymentProcessor, f64); 2] = [(&paypal, 100.0), (&stripe, 150.0)];
    for (processor, amount) in payments {
        console.write_line(&format!(
            "Processing payment via {}...",
            processor.backend_name()
        ));
        purchase(processor, amount, console)?;
    }
    Ok(())
}

/// Shelves [`LIBRARY_TITLES`] and lists them through a fresh cursor.
pub fn library_demo(console: &mut dyn Console) -> Result<(), CursorError> {
    let library: Library = LIBRARY_TITLES.into_iter().map(Book::new).collect();

    let mut cursor = library.create_cursor();
    console.write_line("Books in the library:");
    print_books(&mut cursor, console)?;
    Ok(())
}
