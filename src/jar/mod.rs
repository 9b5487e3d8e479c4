//! Cookie Jar Domain Module
//!
//! This module contains the bag abstraction and everything built on it:
//! - Domain models (flavors, cookies, service inputs and responses)
//! - The `Bag` contract and its hash-backed `Jar`
//! - Business logic helpers (transfers, formatting)
//! - Application state for the jar service
//! - REST API handlers

pub mod bag;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use bag::{Bag, CookieJar, Jar};
pub use handlers::routes;
pub use models::{Category, Cookie, CookieFlavor, Item};
pub use state::{AppState, SharedState};
