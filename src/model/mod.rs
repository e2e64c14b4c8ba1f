//! Pure Application Model
//!
//! Cloneable state for the client, organized into focused sub-models:
//!
//! - **ParkingModel**: server-sourced data (occupancy, activity, stats)
//! - **SessionModel**: the current vehicle and staged image
//! - **UiModel**: toasts, dialogs, tab selection, quit flag
//!
//! No I/O lives here; handlers mutate the model and the UI renders it.

pub mod parking;
pub mod session;
pub mod types;
pub mod ui;

pub use parking::ParkingModel;
pub use session::SessionModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub parking: ParkingModel,
    pub session: SessionModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.ui.show_success(message);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.show_error(message);
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_model_is_blank() {
        let model = Model::new();
        assert!(!model.parking.status_loaded);
        assert!(!model.session.has_vehicle());
        assert!(!model.has_modal());
        assert_eq!(model.ui.active_floor, 1);
    }
}
