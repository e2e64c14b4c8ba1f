//! Tests for destructive-action gating
//!
//! Clear-history, system reset, and vehicle deletion must pass through
//! the confirmation dialog. The dialog yields its staged action exactly
//! once on confirm and never after cancel, so a double keypress or a
//! re-entered handler cannot dispatch the same destructive request
//! twice.

use parktui::model::{Model, PendingAction, UiModel};

#[test]
fn confirm_yields_the_staged_action_once() {
    let mut ui = UiModel::new();
    ui.open_confirm("Clear History", "Sure?", PendingAction::ClearHistory);
    assert!(ui.has_modal());

    assert_eq!(ui.take_confirmed(), Some(PendingAction::ClearHistory));
    // Second confirm keypress after the dialog closed is a no-op
    assert_eq!(ui.take_confirmed(), None);
    assert!(!ui.has_modal());
}

#[test]
fn cancel_never_dispatches() {
    let mut ui = UiModel::new();
    ui.open_confirm("Reset System", "Sure?", PendingAction::ResetSystem);
    ui.cancel_confirm();
    assert_eq!(ui.take_confirmed(), None);
}

#[test]
fn newer_dialog_discards_the_previous_staged_action() {
    let mut ui = UiModel::new();
    ui.open_confirm("Clear History", "Sure?", PendingAction::ClearHistory);
    ui.open_confirm(
        "Delete Vehicle",
        "Sure?",
        PendingAction::DeleteVehicle {
            id: 42,
            license_plate: "ABC123".to_string(),
        },
    );

    // Only the newest action can ever be dispatched
    assert_eq!(
        ui.take_confirmed(),
        Some(PendingAction::DeleteVehicle {
            id: 42,
            license_plate: "ABC123".to_string(),
        })
    );
    assert_eq!(ui.take_confirmed(), None);
}

#[test]
fn dialog_counts_as_a_modal_for_input_routing() {
    let mut model = Model::new();
    assert!(!model.has_modal());

    model
        .ui
        .open_confirm("Clear History", "Sure?", PendingAction::ClearHistory);
    assert!(model.has_modal());

    model.ui.cancel_confirm();
    assert!(!model.has_modal());
}
