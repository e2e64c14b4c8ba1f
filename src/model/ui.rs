//! UI Model
//!
//! Modal dialogs, toast stack, floor tab selection, and the quit flag.
//! The confirmation dialog is a small state machine: destructive
//! operations are staged here as a `PendingAction` and only dispatched
//! when `take_confirmed` yields the action back to the keyboard
//! handler.

use std::time::Instant;

use super::types::{
    ConfirmDialog, PathPrompt, PendingAction, Severity, Toast, VehicleDetailState,
    VehicleListState,
};

#[derive(Debug, Clone)]
pub struct UiModel {
    /// Active toasts, newest last. Expired entries are swept each
    /// frame by the event loop.
    pub toasts: Vec<Toast>,

    /// Confirmation dialog for a destructive action, if open.
    pub confirm: Option<ConfirmDialog>,

    /// All-vehicles modal, if open.
    pub vehicle_list: Option<VehicleListState>,

    /// Vehicle detail modal, if open. May stack above the list modal.
    pub vehicle_detail: Option<VehicleDetailState>,

    /// Path prompt for staging an image, if open.
    pub path_prompt: Option<PathPrompt>,

    /// Floor tab currently shown in the status panel (1-based).
    pub active_floor: u8,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            confirm: None,
            vehicle_list: None,
            vehicle_detail: None,
            path_prompt: None,
            active_floor: 1,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(Toast {
            message: message.into(),
            severity,
            created: Instant::now(),
        });
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.show_toast(message, Severity::Info);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_toast(message, Severity::Success);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_toast(message, Severity::Error);
    }

    /// Drop toasts past their display duration.
    pub fn expire_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.expired(now));
    }

    pub fn has_modal(&self) -> bool {
        self.confirm.is_some()
            || self.vehicle_detail.is_some()
            || self.vehicle_list.is_some()
            || self.path_prompt.is_some()
    }

    // ── Confirmation dialog state machine ──────────────────────────

    /// closed -> open
    pub fn open_confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        action: PendingAction,
    ) {
        self.confirm = Some(ConfirmDialog {
            title: title.into(),
            message: message.into(),
            action,
        });
    }

    /// open -> confirmed -> closed. Yields the staged action exactly
    /// once; the dialog is gone afterwards.
    pub fn take_confirmed(&mut self) -> Option<PendingAction> {
        self.confirm.take().map(|dialog| dialog.action)
    }

    /// open -> cancelled -> closed. Every dismissal path (cancel key,
    /// escape, close) funnels through here so none can leak state.
    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
