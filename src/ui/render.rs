use crate::App;
use ratatui::Frame;

use super::{activity, dialogs, header, layout, legend, results, status, toast, upload};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    header::render_header(
        f,
        layout_info.header_area,
        app.model.parking.stats.as_ref(),
        app.model.session.processing,
    );

    upload::render_upload_panel(
        f,
        layout_info.upload_area,
        app.model.session.staged_image.as_ref(),
        app.preview.as_mut(),
        app.model.session.processing,
    );

    results::render_results_panel(
        f,
        layout_info.results_area,
        app.model.session.current_vehicle.as_ref(),
    );

    let active_floor = app.model.ui.active_floor;
    status::render_status_panel(
        f,
        layout_info.status_area,
        active_floor,
        app.model.parking.floor(active_floor),
        app.model.parking.status_loaded,
    );

    activity::render_activity_panel(
        f,
        layout_info.activity_area,
        &app.model.parking.recent,
        app.model.parking.recent_loaded,
    );

    legend::render_legend(f, layout_info.legend_area, app.model.has_modal());

    // Modal overlays, bottom-most first
    if let Some(list) = &app.model.ui.vehicle_list {
        dialogs::render_vehicle_list(f, list);
    }
    if let Some(detail) = &app.model.ui.vehicle_detail {
        dialogs::render_vehicle_detail(f, &detail.vehicle);
    }
    if let Some(prompt) = &app.model.ui.path_prompt {
        dialogs::render_path_prompt(f, prompt);
    }
    if let Some(dialog) = &app.model.ui.confirm {
        dialogs::render_confirm(f, dialog);
    }

    if !app.model.ui.toasts.is_empty() {
        toast::render_toasts(f, size, &app.model.ui.toasts);
    }
}
