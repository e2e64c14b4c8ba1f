//! Event Handlers
//!
//! - api: applies background service responses to the model
//! - keyboard: maps key events to state changes and dispatched requests

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
