//! Collections that hand out cursors.

use super::book::Book;
use super::cursor::{BookCursor, Cursor};

/// A collection of books that can produce a fresh [`Cursor`] on demand.
///
/// The cursor type borrows from the collection, hence the generic associated type.
pub trait BookCollection {
    type Cursor<'a>: Cursor<Item = &'a Book>
    where
        Self: 'a;

    /// Returns a new cursor positioned before the first book.
    fn create_cursor(&self) -> Self::Cursor<'_>;
}

/// An ordered, append-only shelf of books.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `book` after every book already on the shelf.
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!(title = book.title(), "Book added");
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl BookCollection for Library {
    type Cursor<'a> = BookCursor<'a>;

    fn create_cursor(&self) -> BookCursor<'_> {
        BookCursor::new(&self.books)
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl Extend<Book> for Library {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.add_book(book);
        }
    }
}
