//! Shared fixtures for circ-core integration tests

use chrono::{NaiveDate, TimeZone, Utc};
use circ_core::{FixedClock, Library, SequentialCardNumbers};
use circ_domain::{Author, Book, BookItem, Person};

/// A small library: three cataloged books, two members, a fixed clock
/// starting at 2024-03-01 09:00 UTC.
///
/// Copies: `B001` (1984), `B002` (1984, pub date 1949-06-08), `R001`
/// (1984, reference-only), `B010` (Animal Farm), `B020` (Harry Potter).
pub fn sample_library() -> (Library, FixedClock) {
    let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
    let mut library = Library::new("Central")
        .with_clock(clock.clone())
        .with_card_numbers(SequentialCardNumbers::new());

    let mut nineteen_eighty_four = Book::new("978-0452284234", "1984", "Dystopian fiction")
        .unwrap()
        .with_publisher("Secker & Warburg")
        .with_language("English");
    nineteen_eighty_four.add_author(Author::new("George Orwell"));
    nineteen_eighty_four.add_item(BookItem::new("B001"));
    nineteen_eighty_four.add_item(
        BookItem::new("B002")
            .with_publication_date(NaiveDate::from_ymd_opt(1949, 6, 8).unwrap()),
    );
    nineteen_eighty_four.add_item(BookItem::new("R001").reference_only());
    library.add_book(nineteen_eighty_four).unwrap();

    let mut animal_farm = Book::new("978-0451526342", "Animal Farm", "Political satire").unwrap();
    animal_farm.add_author(Author::new("George Orwell"));
    animal_farm.add_item(BookItem::new("B010"));
    library.add_book(animal_farm).unwrap();

    let mut harry_potter = Book::new(
        "978-0590353427",
        "Harry Potter and the Sorcerer's Stone",
        "Fantasy",
    )
    .unwrap();
    harry_potter.add_author(Author::new("J.K. Rowling"));
    harry_potter.add_item(BookItem::new("B020"));
    library.add_book(harry_potter).unwrap();

    library
        .register_member("M1", Person::new("Ada").with_email("ada@example.org"))
        .unwrap();
    library
        .register_member("M2", Person::new("Grace").with_email("grace@example.org"))
        .unwrap();

    (library, clock)
}
