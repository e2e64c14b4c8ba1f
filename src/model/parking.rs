//! Parking Model
//!
//! Server-sourced parking state: per-floor occupancy, the recent
//! activity feed, and aggregate statistics. Each poll replaces the
//! displayed state wholesale; nothing here is merged incrementally and
//! the client never computes authoritative counts itself.

use crate::api::{ActivityEntry, FloorStatus, ParkingStatus, SystemStats};
use crate::logic::slots;

#[derive(Debug, Clone, Default)]
pub struct ParkingModel {
    /// Latest per-floor occupancy, keyed by floor number.
    pub floors: ParkingStatus,

    /// Whether an initial status response has arrived.
    pub status_loaded: bool,

    /// Recent vehicle events in server order.
    pub recent: Vec<ActivityEntry>,

    /// Whether an initial activity response has arrived (distinguishes
    /// "loading" from a genuinely empty feed).
    pub recent_loaded: bool,

    /// Aggregate counters from /api/stats.
    pub stats: Option<SystemStats>,
}

impl ParkingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the occupancy state with a fresh poll result.
    pub fn apply_status(&mut self, status: ParkingStatus) {
        self.floors = status;
        self.status_loaded = true;
    }

    /// Replace the activity feed with a fresh fetch result.
    pub fn apply_recent(&mut self, entries: Vec<ActivityEntry>) {
        self.recent = entries;
        self.recent_loaded = true;
    }

    pub fn floor(&self, floor: u8) -> Option<&FloorStatus> {
        self.floors.get(&floor)
    }

    pub fn total_parked(&self) -> u32 {
        slots::total_parked(&self.floors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_replaced_wholesale() {
        let mut model = ParkingModel::new();

        let mut first = ParkingStatus::new();
        first.insert(
            1,
            FloorStatus {
                occupied: 5,
                available: 15,
                total: 20,
                occupied_slots: vec![],
            },
        );
        first.insert(2, FloorStatus::default());
        model.apply_status(first);
        assert!(model.status_loaded);
        assert_eq!(model.floor(1).unwrap().occupied, 5);

        // A later poll with no floor 2 entry drops floor 2 entirely
        let mut second = ParkingStatus::new();
        second.insert(
            1,
            FloorStatus {
                occupied: 6,
                available: 14,
                total: 20,
                occupied_slots: vec![],
            },
        );
        model.apply_status(second);
        assert_eq!(model.floor(1).unwrap().occupied, 6);
        assert!(model.floor(2).is_none());
    }

    #[test]
    fn recent_loaded_distinguishes_empty_from_pending() {
        let mut model = ParkingModel::new();
        assert!(!model.recent_loaded);

        model.apply_recent(vec![]);
        assert!(model.recent_loaded);
        assert!(model.recent.is_empty());
    }
}
