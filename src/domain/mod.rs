//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum).
//! Only the genre enumeration, trait definitions and domain error types.

pub mod errors;
pub mod genre;
pub mod repositories;

pub use errors::DomainError;
pub use genre::Genre;
pub use repositories::*;
