//! # Cursor State Machine
//!
//! A [`Cursor`] walks an ordered sequence without exposing how it is stored. Its
//! state is a single position in `0..=len`:
//!
//! - [`has_more`](Cursor::has_more) is a pure query, `position < len`.
//! - [`take_next`](Cursor::take_next) returns the item at `position` and moves to
//!   `position + 1`.
//! - Once `position == len` the cursor is exhausted for good; there is no reset.
//!
//! Calling `take_next` on an exhausted cursor returns [`CursorError::Exhausted`]
//! and leaves the position untouched.

use super::book::Book;
use super::error::CursorError;

/// Anything that can be traversed one item at a time.
pub trait Cursor {
    type Item;

    /// Whether another call to [`take_next`](Cursor::take_next) will succeed.
    fn has_more(&self) -> bool;

    /// Returns the current item and advances by one.
    fn take_next(&mut self) -> Result<Self::Item, CursorError>;
}

/// Cursor over a borrowed slice of books.
///
/// The slice is borrowed for the cursor's whole lifetime, so the owning
/// [`Library`](crate::library::Library) cannot be modified mid-traversal.
#[derive(Debug, Clone)]
pub struct BookCursor<'a> {
    books: &'a [Book],
    position: usize,
}

impl<'a> BookCursor<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self { books, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of books not yet taken.
    pub fn remaining(&self) -> usize {
        self.books.len() - self.position
    }
}

impl<'a> Cursor for BookCursor<'a> {
    type Item = &'a Book;

    fn has_more(&self) -> bool {
        self.position < self.books.len()
    }

    fn take_next(&mut self) -> Result<&'a Book, CursorError> {
        let book = self.books.get(self.position).ok_or(CursorError::Exhausted {
            position: self.position,
            len: self.books.len(),
        })?;
        self.position += 1;
        Ok(book)
    }
}

impl<'a> Iterator for BookCursor<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BookCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![Book::new("A"), Book::new("B")]
    }

    #[test]
    fn has_more_is_idempotent() {
        let books = books();
        let cursor = BookCursor::new(&books);

        for _ in 0..5 {
            assert!(cursor.has_more());
        }
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn take_next_past_end_is_an_error_and_keeps_state() {
        let books = books();
        let mut cursor = BookCursor::new(&books);

        cursor.take_next().unwrap();
        cursor.take_next().unwrap();

        let err = cursor.take_next().unwrap_err();
        assert_eq!(err, CursorError::Exhausted { position: 2, len: 2 });
        assert_eq!(cursor.position(), 2);
        assert!(!cursor.has_more());
    }

    #[test]
    fn empty_slice_starts_exhausted() {
        let mut cursor = BookCursor::new(&[]);
        assert!(!cursor.has_more());
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.take_next().is_err());
    }

    #[test]
    fn iterator_shares_the_same_position() {
        let books = books();
        let mut cursor = BookCursor::new(&books);

        assert_eq!(cursor.take_next().unwrap().title(), "A");
        assert_eq!(cursor.len(), 1);
        let rest: Vec<_> = cursor.by_ref().map(Book::title).collect();
        assert_eq!(rest, ["B"]);
        assert!(!cursor.has_more());
    }
}
