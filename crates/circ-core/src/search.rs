//! Read-only search over a catalog
//!
//! Title, author, and subject queries combine an exact index hit with a
//! case-insensitive substring scan of the canonical list, so `"1984"` and
//! `"198"` both find the same book. Publication-date queries are exact only.

use crate::Catalog;
use chrono::NaiveDate;
use circ_domain::Book;
use std::collections::HashSet;

/// A publication-date query: a date value or a preformatted `YYYY-MM-DD` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubDateQuery {
    Date(NaiveDate),
    Key(String),
}

impl PubDateQuery {
    fn into_key(self) -> String {
        match self {
            PubDateQuery::Date(date) => date.format("%Y-%m-%d").to_string(),
            PubDateQuery::Key(key) => key,
        }
    }
}

impl From<NaiveDate> for PubDateQuery {
    fn from(date: NaiveDate) -> Self {
        PubDateQuery::Date(date)
    }
}

impl From<&str> for PubDateQuery {
    fn from(key: &str) -> Self {
        PubDateQuery::Key(key.to_string())
    }
}

impl From<String> for PubDateQuery {
    fn from(key: String) -> Self {
        PubDateQuery::Key(key)
    }
}

/// Read-only query layer. Holds nothing beyond a catalog reference and never
/// mutates it.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    catalog: &'a Catalog,
}

impl<'a> Search<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Books whose title matches exactly or contains `text`
    /// (case-insensitive), deduplicated in first-seen order.
    pub fn by_title(&self, text: &str) -> Vec<&'a Book> {
        self.exact_then_scan(self.catalog.by_title.get(text), text, |book, needle| {
            book.title.to_lowercase().contains(needle)
        })
    }

    /// Books with an author whose name matches exactly or contains `text`.
    pub fn by_author(&self, text: &str) -> Vec<&'a Book> {
        self.exact_then_scan(self.catalog.by_author.get(text), text, |book, needle| {
            book.authors
                .iter()
                .any(|a| a.name.to_lowercase().contains(needle))
        })
    }

    /// Books whose subject matches exactly or contains `text`.
    pub fn by_subject(&self, text: &str) -> Vec<&'a Book> {
        self.exact_then_scan(self.catalog.by_subject.get(text), text, |book, needle| {
            book.subject.to_lowercase().contains(needle)
        })
    }

    /// Books published on the given date. Exact lookup only; an unknown date
    /// yields an empty result, not an error.
    pub fn by_pub_date(&self, query: impl Into<PubDateQuery>) -> Vec<&'a Book> {
        let key = query.into().into_key();
        match self.catalog.by_pub_date.get(&key) {
            Some(indices) => indices
                .iter()
                .filter_map(|&i| self.catalog.book(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Exact index hits first, then a substring scan over the canonical
    /// list, keeping each book once in first-seen order.
    fn exact_then_scan(
        &self,
        exact: Option<&Vec<usize>>,
        text: &str,
        matches: impl Fn(&Book, &str) -> bool,
    ) -> Vec<&'a Book> {
        let needle = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        if let Some(indices) = exact {
            for &i in indices {
                if seen.insert(i) {
                    if let Some(book) = self.catalog.book(i) {
                        results.push(book);
                    }
                }
            }
        }
        for (i, book) in self.catalog.books().iter().enumerate() {
            if !seen.contains(&i) && matches(book, &needle) {
                seen.insert(i);
                results.push(book);
            }
        }
        results
    }
}
