//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a
//! running backend:
//! - errors: root-cause extraction from anyhow chains for toast text
//! - format: human-readable display formatting
//! - schedule: refresh cadence for the status/stats pollers
//! - slots: slot-grid construction and occupancy math
//! - upload: client-side image validation before staging

pub mod errors;
pub mod format;
pub mod schedule;
pub mod slots;
pub mod upload;
