use std::fmt::{self, Display};

/// A book held by a [`Library`](crate::library::Library).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Displays the title only; this is what [`print_books`](crate::library::print_books) writes.
impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
