//! Session Model
//!
//! The single piece of cross-action state: the most recently recognized
//! vehicle and the image staged for processing. Written only by the
//! process, exit, and reset handlers.

use crate::api::RecognitionResult;
use super::types::StagedImage;

#[derive(Debug, Clone, Default)]
pub struct SessionModel {
    /// Recognition result currently on display. Set by a successful
    /// process response, cleared on exit or system reset.
    pub current_vehicle: Option<RecognitionResult>,

    /// Image staged for the next process action.
    pub staged_image: Option<StagedImage>,

    /// Whether a process request is in flight. Blocks re-submission
    /// until the response handler clears it on either outcome.
    pub processing: bool,
}

impl SessionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_vehicle(&self) -> bool {
        self.current_vehicle.is_some()
    }

    /// License plate of the current vehicle, required before an exit
    /// request may be sent.
    pub fn license_plate(&self) -> Option<&str> {
        self.current_vehicle
            .as_ref()
            .and_then(|v| v.vehicle.license_plate.as_deref())
    }

    /// Drop all session state. Used after exit and system reset.
    pub fn clear(&mut self) {
        self.current_vehicle = None;
        self.staged_image = None;
    }
}
