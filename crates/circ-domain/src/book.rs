//! Book domain model

use super::{Author, BookItem};
use serde::{Deserialize, Serialize};

/// A validation error for a domain record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        }
    }
}

/// A bibliographic record. Owns its physical copies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub subject: String,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub pages: Option<u32>,
    pub authors: Vec<Author>,
    pub items: Vec<BookItem>,
}

impl Book {
    /// Create a new book with required fields.
    ///
    /// Title and subject must be non-empty; authors and copies start empty.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        subject: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let subject = subject.into();
        if title.is_empty() {
            return Err(ValidationError::required("title"));
        }
        if subject.is_empty() {
            return Err(ValidationError::required("subject"));
        }
        Ok(Self {
            isbn: isbn.into(),
            title,
            subject,
            publisher: None,
            language: None,
            pages: None,
            authors: Vec::new(),
            items: Vec::new(),
        })
    }

    /// Builder method to set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Builder method to set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder method to set the page count
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Add an author, recording the back-reference on the author record.
    pub fn add_author(&mut self, mut author: Author) {
        author.books.push(self.isbn.clone());
        self.authors.push(author);
    }

    /// Add a physical copy of this book.
    pub fn add_item(&mut self, item: BookItem) {
        self.items.push(item);
    }

    /// Publication-date index key (`YYYY-MM-DD`), taken from the first copy.
    pub fn publication_date_key(&self) -> Option<String> {
        self.items
            .first()
            .and_then(|item| item.publication_date)
            .map(|date| date.format("%Y-%m-%d").to_string())
    }
}
