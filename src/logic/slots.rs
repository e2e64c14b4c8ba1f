//! Slot-grid construction and occupancy math
//!
//! The lot has three floors of 20 slots each. Slot codes combine a
//! roman-numeral floor prefix with a letter, e.g. "II.C" is the third
//! slot on floor 2. All occupancy counts are authoritative from the
//! server; the only derived value the client computes is the
//! percentage-occupied display.

use crate::api::{FloorStatus, OccupiedSlot, ParkingStatus};

pub const FLOOR_COUNT: u8 = 3;
pub const SLOTS_PER_FLOOR: usize = 20;
pub const TOTAL_CAPACITY: u32 = FLOOR_COUNT as u32 * SLOTS_PER_FLOOR as u32;

/// Roman-numeral prefix for a floor number (1-based).
pub fn floor_prefix(floor: u8) -> Option<&'static str> {
    match floor {
        1 => Some("I"),
        2 => Some("II"),
        3 => Some("III"),
        _ => None,
    }
}

/// Slot code for a position on a floor: prefix + letter A-T.
pub fn slot_code(floor: u8, index: usize) -> Option<String> {
    if index >= SLOTS_PER_FLOOR {
        return None;
    }
    let prefix = floor_prefix(floor)?;
    let letter = (b'A' + index as u8) as char;
    Some(format!("{}.{}", prefix, letter))
}

/// One cell of the rendered slot grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    pub code: String,
    /// License plate of the occupant, if the slot is taken. A taken
    /// slot with no plate on record still counts as occupied.
    pub occupant: Option<String>,
    pub occupied: bool,
}

/// Build the fixed 20-cell grid for a floor. A cell is occupied iff its
/// code appears in the server-supplied list by exact equality; unmatched
/// cells render empty.
pub fn build_slot_grid(floor: u8, occupied_slots: &[OccupiedSlot]) -> Vec<SlotCell> {
    let mut grid = Vec::with_capacity(SLOTS_PER_FLOOR);
    for index in 0..SLOTS_PER_FLOOR {
        let Some(code) = slot_code(floor, index) else {
            break;
        };
        let slot = occupied_slots.iter().find(|s| s.slot_code == code);
        grid.push(SlotCell {
            occupied: slot.is_some(),
            occupant: slot.and_then(|s| s.license_plate.clone()),
            code,
        });
    }
    grid
}

/// Percentage occupied, rounded. Zero-capacity floors display 0 rather
/// than dividing by zero, and an occupied count above total caps at
/// 100 so the gauge widget never sees an out-of-range value.
pub fn occupancy_percent(occupied: u32, total: u32) -> u16 {
    if total == 0 {
        return 0;
    }
    (((occupied as f64 / total as f64) * 100.0).round() as u16).min(100)
}

pub fn floor_percent(status: &FloorStatus) -> u16 {
    occupancy_percent(status.occupied, status.total)
}

/// Total vehicles parked across all floors.
pub fn total_parked(status: &ParkingStatus) -> u32 {
    (1..=FLOOR_COUNT)
        .filter_map(|floor| status.get(&floor))
        .map(|f| f.occupied)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(code: &str, plate: Option<&str>) -> OccupiedSlot {
        OccupiedSlot {
            slot_code: code.to_string(),
            license_plate: plate.map(|p| p.to_string()),
            brand: None,
            model: None,
            entry_time: None,
        }
    }

    #[test]
    fn slot_codes_span_a_through_t() {
        assert_eq!(slot_code(1, 0).as_deref(), Some("I.A"));
        assert_eq!(slot_code(2, 2).as_deref(), Some("II.C"));
        assert_eq!(slot_code(3, 19).as_deref(), Some("III.T"));
        assert_eq!(slot_code(1, 20), None);
        assert_eq!(slot_code(4, 0), None);
    }

    #[test]
    fn grid_matches_by_exact_code_equality() {
        let slots = vec![
            occupied("II.C", Some("ABC123")),
            occupied("II.T", None),
            // Wrong floor prefix must not match floor 2 cells
            occupied("I.A", Some("XYZ789")),
        ];
        let grid = build_slot_grid(2, &slots);
        assert_eq!(grid.len(), SLOTS_PER_FLOOR);

        for cell in &grid {
            match cell.code.as_str() {
                "II.C" => {
                    assert!(cell.occupied);
                    assert_eq!(cell.occupant.as_deref(), Some("ABC123"));
                }
                "II.T" => {
                    assert!(cell.occupied);
                    assert!(cell.occupant.is_none());
                }
                _ => assert!(!cell.occupied, "{} should be empty", cell.code),
            }
        }
    }

    #[test]
    fn grid_is_all_empty_without_occupants() {
        let grid = build_slot_grid(1, &[]);
        assert_eq!(grid.len(), SLOTS_PER_FLOOR);
        assert!(grid.iter().all(|c| !c.occupied));
    }

    #[test]
    fn percent_is_zero_for_zero_capacity() {
        assert_eq!(occupancy_percent(0, 0), 0);
        assert_eq!(occupancy_percent(5, 0), 0);
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(occupancy_percent(10, 20), 50);
        assert_eq!(occupancy_percent(1, 3), 33);
        assert_eq!(occupancy_percent(2, 3), 67);
        assert_eq!(occupancy_percent(20, 20), 100);
    }

    #[test]
    fn percent_caps_overfull_counts_at_one_hundred() {
        assert_eq!(occupancy_percent(25, 20), 100);
        assert_eq!(occupancy_percent(u32::MAX, 1), 100);
    }

    #[test]
    fn total_parked_sums_all_floors() {
        let mut status = ParkingStatus::new();
        status.insert(
            1,
            FloorStatus {
                occupied: 3,
                available: 17,
                total: 20,
                occupied_slots: vec![],
            },
        );
        status.insert(
            3,
            FloorStatus {
                occupied: 7,
                available: 13,
                total: 20,
                occupied_slots: vec![],
            },
        );
        // Floor 2 missing from the response entirely
        assert_eq!(total_parked(&status), 10);
    }
}
