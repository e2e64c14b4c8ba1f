//! Error message extraction for toast display
//!
//! Request failures surface to the user as toast text. The anyhow
//! chain usually wraps a reqwest error in one or more context layers;
//! the reqwest error (or failing that, the root cause) is the most
//! informative line to show.

use anyhow::Error;

/// Pick the most specific message out of an error chain.
pub fn format_error_message(error: &Error) -> String {
    // Prefer the reqwest error anywhere in the chain
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());
    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // Otherwise walk to the deepest cause
    let mut deepest = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }
    deepest
}
