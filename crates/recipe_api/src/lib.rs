//! HTTP adapter for the recipe API.
//!
//! # Responsibility
//! - Expose `recipe_core` CRUD operations as a JSON-over-HTTP surface.
//! - Keep handlers thin; business rules live in the core crate.
//!
//! # Invariants
//! - Response body shapes and messages are a compatibility contract and must
//!   not change, including the 200 status on create validation failure.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
