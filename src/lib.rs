#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **Three classic design patterns, written the Rust way.**
//!
//! This crate walks through the **Factory**, **Adapter** and **Iterator** patterns.
//! Each one is a small, self-contained module: a couple of concrete types, one
//! trait that abstracts over them, and a driver function that only knows the trait.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits at the seams
//!
//! Wherever an object-oriented design would reach for an interface, we use a trait:
//! - [`PizzaFactory`](pizza::PizzaFactory) and [`Pizza`](pizza::Pizza) for the factory pattern.
//! - [`PaymentProcessor`](payment::PaymentProcessor) for the adapter pattern.
//! - [`Cursor`](library::Cursor) and [`BookCollection`](library::BookCollection) for the iterator pattern.
//!
//! Drivers take `&dyn Trait` (or a generic bound), so they cannot depend on a
//! concrete type even by accident.
//!
//! ### Output as a dependency
//!
//! No driver calls `println!` directly. Every driver writes through a
//! [`Console`](console::Console), which makes the exact output testable with a
//! [`RecordingConsole`](console::RecordingConsole).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! The patterns themselves have no error paths, but two operations can be misused:
//! charging a negative amount and reading past the end of a cursor. Both fail
//! loudly with their own error type ([`PaymentError`](payment::PaymentError),
//! [`CursorError`](library::CursorError)) instead of silently doing something odd.
//!
//! ### 2. Ownership instead of conventions
//! An adapter owns its backend as a plain field, and a cursor borrows the
//! library's books. The borrow checker therefore rules out mutating a library
//! while it is being traversed.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields. Logs go to stderr so the demonstration
//! output on stdout stays exact. See [`runtime::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`pizza`] - Factory pattern: factories building pizzas, driven by [`order_pizza`](pizza::order_pizza).
//! - [`payment`] - Adapter pattern: PayPal and Stripe behind one trait, driven by [`purchase`](payment::purchase).
//! - [`library`] - Iterator pattern: a book shelf and its cursor, driven by [`print_books`](library::print_books).
//! - [`console`] - The line sink every driver writes to.
//! - [`demo`] - Runs all three walkthroughs in order.
//! - [`runtime`] - Logging setup for the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demonstrations
//! cargo run
//!
//! # With logs on stderr
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod console;
pub mod demo;
pub mod library;
pub mod payment;
pub mod pizza;
pub mod runtime;
