//! Shared model types: toasts, dialogs, modal view states.

use std::path::PathBuf;
use std::time::Instant;

use crate::api::VehicleRecord;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u128 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One transient notification. Multiple toasts stack; there is no
/// deduplication.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
}

impl Toast {
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created).as_millis() >= TOAST_DURATION_MS
    }
}

/// Destructive operation awaiting confirmation. The endpoint is only
/// called with a value of this type yielded by a confirmed dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    ClearHistory,
    ResetSystem,
    DeleteVehicle { id: i64, license_plate: String },
}

/// Confirmation dialog: closed -> open -> {confirmed, cancelled} -> closed.
/// Owned by the UI model; see `UiModel::{open_confirm, take_confirmed, cancel_confirm}`.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: PendingAction,
}

/// Modal list of all parked vehicles.
#[derive(Debug, Clone)]
pub struct VehicleListState {
    pub vehicles: Vec<VehicleRecord>,
    pub selected: Option<usize>,
}

impl VehicleListState {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        let selected = if vehicles.is_empty() { None } else { Some(0) };
        Self { vehicles, selected }
    }

    pub fn selected_vehicle(&self) -> Option<&VehicleRecord> {
        self.selected.and_then(|idx| self.vehicles.get(idx))
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected {
            if idx + 1 < self.vehicles.len() {
                self.selected = Some(idx + 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }

    /// Drop a vehicle by id after a confirmed deletion, keeping the
    /// selection on a valid row.
    pub fn remove(&mut self, id: i64) {
        self.vehicles.retain(|v| v.id != id);
        self.selected = match self.selected {
            _ if self.vehicles.is_empty() => None,
            Some(idx) => Some(idx.min(self.vehicles.len() - 1)),
            None => None,
        };
    }
}

/// Modal detail view of a single vehicle record.
#[derive(Debug, Clone)]
pub struct VehicleDetailState {
    pub vehicle: VehicleRecord,
}

/// Text prompt for entering a local image path to stage.
#[derive(Debug, Clone, Default)]
pub struct PathPrompt {
    pub input: String,
}

/// Image staged for processing after passing validation.
#[derive(Debug, Clone)]
pub struct StagedImage {
    pub path: PathBuf,
    pub file_size: u64,
}

impl StagedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}
