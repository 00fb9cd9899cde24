//! Catalog: canonical book list plus derived lookup indexes

use circ_domain::Book;
use std::collections::HashMap;

/// The canonical store of books and four derived indexes (title, author
/// name, subject, publication-date key).
///
/// The indexes map a key to positions in the canonical list, in insertion
/// order, and are rebuildable from the list at any time. Nothing else may
/// edit them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    pub(crate) by_title: HashMap<String, Vec<usize>>,
    pub(crate) by_author: HashMap<String, Vec<usize>>,
    pub(crate) by_subject: HashMap<String, Vec<usize>>,
    pub(crate) by_pub_date: HashMap<String, Vec<usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books in the canonical list.
    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The canonical book list, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Mutable access to a book, for bulk edits (authors, copies).
    ///
    /// After mutating indexed fields, call [`Catalog::rebuild_indexes`] to
    /// restore index consistency.
    pub fn book_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Position of a book in the canonical list by ISBN.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn == isbn)
    }

    /// Append a book to the canonical list and index it under its title,
    /// each author name, its subject, and (when the first copy carries a
    /// publication date) the `YYYY-MM-DD` date key. Returns the book's
    /// position in the canonical list.
    pub fn add_book(&mut self, book: Book) -> usize {
        let index = self.books.len();
        self.books.push(book);
        self.index_book(index);
        tracing::debug!(
            title = %self.books[index].title,
            total = self.books.len(),
            "book added to catalog"
        );
        index
    }

    /// Clear all four indexes and re-derive them from the canonical list in
    /// one pass. Idempotent.
    pub fn rebuild_indexes(&mut self) {
        self.by_title.clear();
        self.by_author.clear();
        self.by_subject.clear();
        self.by_pub_date.clear();
        for index in 0..self.books.len() {
            self.index_book(index);
        }
        tracing::debug!(total = self.books.len(), "catalog indexes rebuilt");
    }

    fn index_book(&mut self, index: usize) {
        let book = &self.books[index];
        self.by_title
            .entry(book.title.clone())
            .or_default()
            .push(index);
        for author in &book.authors {
            self.by_author
                .entry(author.name.clone())
                .or_default()
                .push(index);
        }
        self.by_subject
            .entry(book.subject.clone())
            .or_default()
            .push(index);
        if let Some(key) = book.publication_date_key() {
            self.by_pub_date.entry(key).or_default().push(index);
        }
    }
}
