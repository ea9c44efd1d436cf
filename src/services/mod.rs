pub mod recommendation_service;

pub use recommendation_service::{DEFAULT_LIMIT, Recommender, recommend_with};
