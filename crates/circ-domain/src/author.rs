//! Author representation

use serde::{Deserialize, Serialize};

/// Represents an author of one or more books
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
    pub description: Option<String>,
    /// ISBNs of books this author is credited on. Maintained by
    /// `Book::add_author`; do not edit directly.
    pub books: Vec<String>,
}

impl Author {
    /// Create a new author with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            books: Vec::new(),
        }
    }

    /// Builder method to add a biographical description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
