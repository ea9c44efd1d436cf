//! Chat responder: keyword intents, canned replies and per-session state

pub mod models;
pub mod service;
pub mod session;

pub use models::{Intent, Responses};
pub use service::Responder;
pub use session::{SessionState, SessionStore};
