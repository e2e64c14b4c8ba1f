//! API Response Handler
//!
//! Applies responses from the background service to the model.
//! Responses are processed in arrival order; each poll replaces the
//! displayed state wholesale, so a late response simply loses to the
//! next refresh (last write wins).
//!
//! Background poll failures (status/recent/stats) are debug-logged
//! rather than toasted to avoid a toast storm while the backend is
//! down; user-initiated actions always report both outcomes.

use crate::api::ParkingStatus;
use crate::logic::errors::format_error_message;
use crate::model::VehicleDetailState;
use crate::services::api::ApiResponse;
use crate::App;

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ProcessResult { result } => {
            // Re-enable the process action on every exit path
            app.model.session.processing = false;

            match result {
                Ok(data) => {
                    app.model.session.current_vehicle = Some(data);
                    app.model.show_success("Vehicle processed successfully");
                    app.request_data_refresh();
                }
                Err(e) => {
                    app.model.show_error(format_error_message(&e));
                }
            }
        }

        ApiResponse::StatusResult { status } => match status {
            Ok(status) => apply_status(app, status),
            Err(e) => {
                crate::log_debug(&format!("Status poll failed: {}", format_error_message(&e)));
            }
        },

        ApiResponse::RecentResult { entries } => match entries {
            Ok(entries) => app.model.parking.apply_recent(entries),
            Err(e) => {
                crate::log_debug(&format!("Recent poll failed: {}", format_error_message(&e)));
            }
        },

        ApiResponse::ExitResult { message } => match message {
            Ok(message) => {
                app.model.show_success(message);
                app.model.session.clear();
                app.clear_preview();
                app.request_data_refresh();
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::ClearHistoryResult { message } => match message {
            Ok(message) => {
                app.model.show_success(message);
                app.request_data_refresh();
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::ResetResult { message } => match message {
            Ok(message) => {
                app.model.show_success(message);
                app.model.session.clear();
                app.clear_preview();
                app.request_data_refresh();
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::ExportResult { saved_to } => match saved_to {
            Ok(path) => {
                app.model
                    .show_success(format!("Data exported to {}", path.display()));
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::AllVehiclesResult { vehicles } => match vehicles {
            Ok(vehicles) => {
                app.model.ui.vehicle_list =
                    Some(crate::model::VehicleListState::new(vehicles));
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::StatsResult { stats } => match stats {
            Ok(stats) => app.model.parking.stats = Some(stats),
            Err(e) => {
                crate::log_debug(&format!("Stats poll failed: {}", format_error_message(&e)));
            }
        },

        ApiResponse::VehicleDetailResult { vehicle } => match vehicle {
            Ok(vehicle) => {
                app.model.ui.vehicle_detail = Some(VehicleDetailState { vehicle });
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },

        ApiResponse::DeleteVehicleResult { id, message } => match message {
            Ok(message) => {
                app.model.show_success(message);
                app.model.ui.vehicle_detail = None;
                // Prune the list modal behind the detail, if open
                if let Some(list) = &mut app.model.ui.vehicle_list {
                    list.remove(id);
                }
                app.request_data_refresh();
            }
            Err(e) => {
                app.model.show_error(format_error_message(&e));
            }
        },
    }
}

fn apply_status(app: &mut App, status: ParkingStatus) {
    app.model.parking.apply_status(status);
}
