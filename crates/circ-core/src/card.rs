//! Injected card-number generation
//!
//! Registration issues a library card with a generated number. The generator
//! is a capability handed to `Library` so card numbers are deterministic in
//! tests and never produced by ad-hoc string formatting inside the core.

use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

/// Source of fresh card numbers.
pub trait CardNumbers: Send + Sync {
    fn next(&self) -> String;
}

/// UUID-backed card numbers, `LIB-<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCardNumbers;

impl CardNumbers for UuidCardNumbers {
    fn next(&self) -> String {
        format!("LIB-{}", Uuid::new_v4())
    }
}

/// Sequential card numbers for tests, `LIB-0001`, `LIB-0002`, ...
#[derive(Debug, Default)]
pub struct SequentialCardNumbers {
    counter: AtomicU32,
}

impl SequentialCardNumbers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardNumbers for SequentialCardNumbers {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("LIB-{:04}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_numbers_are_distinct_and_ordered() {
        let cards = SequentialCardNumbers::new();
        assert_eq!(cards.next(), "LIB-0001");
        assert_eq!(cards.next(), "LIB-0002");
    }

    #[test]
    fn uuid_numbers_carry_prefix() {
        let cards = UuidCardNumbers;
        assert!(cards.next().starts_with("LIB-"));
    }
}
