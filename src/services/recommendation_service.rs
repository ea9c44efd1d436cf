//! Recommendation Service - Pure catalog filtering without HTTP layer
//!
//! Filters the catalog by genre, shuffles the matches and keeps the first
//! `limit`. Called by the chat responder and by the recommendations route.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::domain::{BookCatalog, Genre};
use crate::models::Book;

/// Number of books returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 3;

/// Filter `catalog` by `genre` and return up to `limit` books in random order.
///
/// An absent or empty genre selects the whole catalog. Otherwise a book is
/// kept only if its genre equals the input after lower-casing both sides;
/// an unknown genre yields an empty list.
pub fn recommend_with<R: Rng + ?Sized>(
    catalog: &dyn BookCatalog,
    genre: Option<&str>,
    limit: usize,
    rng: &mut R,
) -> Vec<Book> {
    let wanted = match genre.filter(|g| !g.is_empty()) {
        Some(g) => match Genre::parse(g) {
            Some(parsed) => Some(parsed),
            None => return Vec::new(),
        },
        None => None,
    };

    let mut matches: Vec<Book> = catalog
        .all()
        .iter()
        .filter(|book| wanted.is_none_or(|g| book.genre == g))
        .cloned()
        .collect();

    matches.shuffle(rng);
    matches.truncate(limit);
    matches
}

/// Catalog filter with an injectable random source
pub struct Recommender {
    catalog: Arc<dyn BookCatalog>,
    rng: Mutex<StdRng>,
}

impl Recommender {
    /// Recommender seeded from OS entropy
    pub fn new(catalog: Arc<dyn BookCatalog>) -> Self {
        Self {
            catalog,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Recommender with a fixed seed, for reproducible ordering
    pub fn with_seed(catalog: Arc<dyn BookCatalog>, seed: u64) -> Self {
        Self {
            catalog,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn recommend(&self, genre: Option<&str>, limit: usize) -> Vec<Book> {
        // The RNG has no invariant a panicking holder could break
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let books = recommend_with(self.catalog.as_ref(), genre, limit, &mut *rng);

        tracing::debug!(
            "Recommend - genre={:?}, limit={}, returned={}",
            genre,
            limit,
            books.len()
        );
        books
    }
}
