//! In-memory book catalog
//!
//! The catalog is a fixed literal table built once at startup and never
//! mutated afterwards.

use crate::domain::{BookCatalog, Genre};
use crate::models::Book;

pub struct StaticCatalog {
    books: Vec<Book>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        let books = vec![
            Book::new(1, "To Kill a Mockingbird", "Harper Lee", Genre::Fiction),
            Book::new(2, "1984", "George Orwell", Genre::Fiction),
            Book::new(3, "The Great Gatsby", "F. Scott Fitzgerald", Genre::Fiction),
            Book::new(4, "Pride and Prejudice", "Jane Austen", Genre::Romance),
            Book::new(
                5,
                "Murder on the Orient Express",
                "Agatha Christie",
                Genre::Mystery,
            ),
            Book::new(6, "The Hobbit", "J.R.R. Tolkien", Genre::Fantasy),
            Book::new(
                7,
                "Harry Potter and the Sorcerer's Stone",
                "J.K. Rowling",
                Genre::Fantasy,
            ),
            Book::new(
                8,
                "A Brief History of Time",
                "Stephen Hawking",
                Genre::NonFiction,
            ),
            Book::new(9, "Sapiens", "Yuval Noah Harari", Genre::NonFiction),
            Book::new(10, "The Da Vinci Code", "Dan Brown", Genre::Thriller),
        ];

        tracing::debug!("Loaded static catalog with {} books", books.len());
        Self { books }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCatalog for StaticCatalog {
    fn all(&self) -> &[Book] {
        &self.books
    }
}
