//! Integration tests for the address book collection and its pagination.

use address_book::{AddressBook, Record};

fn sample_record(name: &str, phone: &str) -> Record {
    let mut record = Record::new(name, "1990.01.01").unwrap();
    record.add_phone(phone).unwrap();
    record
}

fn populated_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(sample_record(&format!("Contact {i}"), &format!("{:010}", i)));
    }
    book
}

#[test]
fn test_twelve_records_make_three_pages() {
    let book = populated_book(12);

    let sizes: Vec<usize> = book.pages().map(|page| page.len()).collect();
    assert_eq!(sizes, vec![5, 5, 2]);

    // A fresh pass reproduces the same pages
    let first: Vec<Vec<String>> = book
        .pages()
        .map(|page| page.iter().map(|r| r.to_string()).collect())
        .collect();
    let second: Vec<Vec<String>> = (&book)
        .into_iter()
        .map(|page| page.iter().map(|r| r.to_string()).collect())
        .collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_empty_book_has_no_pages() {
    let book = AddressBook::new();
    assert!(book.pages().next().is_none());
}

#[test]
fn test_add_record_overwrites_same_name() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", "1111111111"));
    book.add_record(sample_record("John", "2222222222"));

    assert_eq!(book.len(), 1);
    let john = book.find("John").unwrap();
    assert!(john.find_phone("2222222222").is_some());
    assert!(john.find_phone("1111111111").is_none());
}

#[test]
fn test_find_absent_name() {
    let book = populated_book(3);
    assert!(book.find("Nobody").is_none());
}

#[test]
fn test_delete_absent_name_is_noop() {
    let mut book = populated_book(3);
    let before = book.clone();
    book.delete("Nobody");
    assert_eq!(book, before);

    book.delete("Contact 1");
    assert_eq!(book.len(), 2);
    assert!(book.find("Contact 1").is_none());
}

#[test]
fn test_pages_reflect_book_at_pass_start() {
    let mut book = populated_book(6);
    let before: usize = book.pages().map(|page| page.len()).sum();

    book.add_record(sample_record("Late", "9999999999"));
    let after: usize = book.pages().map(|page| page.len()).sum();

    assert_eq!(before, 6);
    assert_eq!(after, 7);
}

#[test]
fn test_listing_output() {
    let mut book = populated_book(3);
    book.set_page_size(2).unwrap();

    let mut out = String::new();
    for page in &book {
        for contact in page {
            out.push_str(&format!("{}\n", contact));
        }
        out.push_str("===\n");
    }

    assert_eq!(
        out,
        "Contact name: Contact 0, phones: 0000000000\n\
         Contact name: Contact 1, phones: 0000000001\n\
         ===\n\
         Contact name: Contact 2, phones: 0000000002\n\
         ===\n"
    );
}
