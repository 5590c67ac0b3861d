//! # Iterator Pattern: Library
//!
//! A [`Library`] stores books in insertion order and hands out [`BookCursor`]s
//! through the [`BookCollection`] trait. [`print_books`] works with any
//! [`Cursor`] and never touches the library's storage directly.
//!
//! ```rust
//! use pattern_recipe::console::RecordingConsole;
//! use pattern_recipe::library::{print_books, Book, BookCollection, Library};
//!
//! let mut library = Library::new();
//! library.add_book(Book::new("Dune"));
//! library.add_book(Book::new("Emma"));
//!
//! let mut console = RecordingConsole::new();
//! let mut cursor = library.create_cursor();
//! let printed = print_books(&mut cursor, &mut console).unwrap();
//!
//! assert_eq!(printed, 2);
//! assert_eq!(console.lines(), ["Dune", "Emma"]);
//! ```

pub mod book;
pub mod collection;
pub mod cursor;
pub mod error;

pub use book::*;
pub use collection::*;
pub use cursor::*;
pub use error::*;

use crate::console::Console;
use std::fmt::Display;
use tracing::{info, instrument};

/// Drains `cursor`, writing each item's display value as one line.
///
/// Returns how many lines were written. The cursor is exhausted afterwards.
#[instrument(skip_all)]
pub fn print_books<C>(cursor: &mut C, console: &mut dyn Console) -> Result<usize, CursorError>
where
    C: Cursor + ?Sized,
    C::Item: Display,
{
    let mut printed = 0;
    while cursor.has_more() {
        let item = cursor.take_next()?;
        console.write_line(&item.to_string());
        printed += 1;
    }

    info!(printed, "Listing complete");
    Ok(printed)
}
