// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, panels, legend)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top bar with system statistics
// - upload: Renders the image upload panel (staged image + preview)
// - results: Renders the recognition results panel
// - status: Renders the per-floor parking grid with occupancy gauge
// - activity: Renders the recent activity feed
// - legend: Renders hotkey legend
// - dialogs: Renders modal overlays (confirm, path prompt, vehicle list/detail)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod activity;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod results;
pub mod status;
pub mod toast;
pub mod upload;

// Re-export main render function for convenience
pub use render::render;
