//! Keyboard Input Handler
//!
//! Dispatch order matters: an open modal captures input before the
//! global hotkeys, and the path prompt captures everything while
//! typing. Destructive actions (clear history, reset, delete vehicle)
//! never reach the API service directly from here; they stage a
//! `PendingAction` in the confirmation dialog and dispatch only when
//! the dialog yields it back on confirm.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::PendingAction;
use crate::services::api::ApiRequest;
use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Path prompt captures all input while open
    if app.model.ui.path_prompt.is_some() {
        return handle_path_prompt_key(app, key);
    }

    // Confirmation dialog is always topmost
    if app.model.ui.confirm.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(action) = app.model.ui.take_confirmed() {
                    dispatch_confirmed(app, action);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.cancel_confirm();
            }
            _ => {} // Ignore other keys while the dialog is showing
        }
        return Ok(());
    }

    // Vehicle detail modal (stacks above the list modal)
    if app.model.ui.vehicle_detail.is_some() {
        match key.code {
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if let Some(detail) = &app.model.ui.vehicle_detail {
                    let id = detail.vehicle.id;
                    let plate = detail
                        .vehicle
                        .license_plate
                        .clone()
                        .unwrap_or_else(|| format!("#{}", id));
                    app.model.ui.open_confirm(
                        "Delete Vehicle",
                        format!(
                            "Are you sure you want to delete vehicle {}? This action cannot be undone.",
                            plate
                        ),
                        PendingAction::DeleteVehicle {
                            id,
                            license_plate: plate,
                        },
                    );
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                app.model.ui.vehicle_detail = None;
            }
            _ => {}
        }
        return Ok(());
    }

    // Vehicle list modal
    if let Some(list) = &mut app.model.ui.vehicle_list {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => list.select_previous(),
            KeyCode::Enter => {
                if let Some(vehicle) = list.selected_vehicle() {
                    let id = vehicle.id;
                    let _ = app.api_tx.send(ApiRequest::GetVehicle { id });
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                app.model.ui.vehicle_list = None;
            }
            _ => {}
        }
        return Ok(());
    }

    // Global hotkeys
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Char('o') => {
            app.model.ui.path_prompt = Some(Default::default());
        }

        KeyCode::Char('p') => {
            process_staged_image(app);
        }

        KeyCode::Char('c') => {
            // The backend has no confirm endpoint; entry is already
            // recorded by process. Acknowledge and refresh.
            if app.model.session.has_vehicle() {
                app.model.show_success("Vehicle entry confirmed");
                let _ = app.api_tx.send(ApiRequest::GetStatus);
            } else {
                app.model.show_error("No vehicle to confirm");
            }
        }

        KeyCode::Char('x') => {
            request_vehicle_exit(app);
        }

        KeyCode::Char('r') => {
            app.request_data_refresh();
        }

        KeyCode::Char('1') => app.model.ui.active_floor = 1,
        KeyCode::Char('2') => app.model.ui.active_floor = 2,
        KeyCode::Char('3') => app.model.ui.active_floor = 3,

        KeyCode::Char('h') => {
            app.model.ui.open_confirm(
                "Clear History",
                "Are you sure you want to clear all recent activity history? This action cannot be undone.",
                PendingAction::ClearHistory,
            );
        }

        KeyCode::Char('R') => {
            app.model.ui.open_confirm(
                "Reset System",
                "WARNING: This will reset the entire system, clear all vehicles and history. Are you sure?",
                PendingAction::ResetSystem,
            );
        }

        KeyCode::Char('e') => {
            // Export has no busy flag; acknowledge the keypress while
            // the download runs
            app.model.ui.show_info("Exporting data...");
            let _ = app.api_tx.send(ApiRequest::ExportData);
        }

        KeyCode::Char('v') => {
            let _ = app.api_tx.send(ApiRequest::GetAllVehicles);
        }

        _ => {}
    }

    Ok(())
}

fn handle_path_prompt_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char(c) => {
            if let Some(prompt) = &mut app.model.ui.path_prompt {
                prompt.input.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = &mut app.model.ui.path_prompt {
                prompt.input.pop();
            }
        }
        KeyCode::Esc => {
            app.model.ui.path_prompt = None;
        }
        KeyCode::Enter => {
            let input = app
                .model
                .ui
                .path_prompt
                .take()
                .map(|p| p.input)
                .unwrap_or_default();
            let path = input.trim();
            if !path.is_empty() {
                app.stage_image(path);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Submit the staged image. Validation failures and double submissions
/// never produce a request.
fn process_staged_image(app: &mut App) {
    if app.model.session.processing {
        return;
    }
    let Some(staged) = &app.model.session.staged_image else {
        app.model.show_error("No image staged - press 'o' to select one");
        return;
    };

    let path = staged.path.clone();
    app.model.session.processing = true;
    let _ = app.api_tx.send(ApiRequest::ProcessImage { path });
}

/// Exit requires a loaded vehicle with a license plate; otherwise the
/// action is rejected client-side with no network call.
fn request_vehicle_exit(app: &mut App) {
    let Some(plate) = app.model.session.license_plate().map(|p| p.to_string()) else {
        app.model.show_error("No vehicle selected for exit");
        return;
    };

    let _ = app.api_tx.send(ApiRequest::VehicleExit {
        license_plate: plate,
    });
}

fn dispatch_confirmed(app: &mut App, action: PendingAction) {
    let request = match action {
        PendingAction::ClearHistory => ApiRequest::ClearHistory,
        PendingAction::ResetSystem => ApiRequest::ResetSystem,
        PendingAction::DeleteVehicle { id, .. } => ApiRequest::DeleteVehicle { id },
    };
    let _ = app.api_tx.send(request);
}
