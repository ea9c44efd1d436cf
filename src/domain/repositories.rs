//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use crate::models::book::Book;

/// Read-only access to the book catalog
pub trait BookCatalog: Send + Sync {
    /// Every book, in catalog order
    fn all(&self) -> &[Book];
}
