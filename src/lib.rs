//! Parking TUI Library
//!
//! Exposes the pure modules (API types, business logic, model) for
//! integration tests. The binary wires these to the terminal and the
//! background API service.

pub mod api;
pub mod logic;
pub mod model;
