//! Display formatting
//!
//! Pure functions turning server payload fields into the strings shown
//! in the result panels. Absent fields render as "-" rather than blank.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display an optional field, substituting "-" when absent or empty.
pub fn dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// "Floor 2" style label, "-" when no floor was assigned.
pub fn display_floor(floor: Option<u8>) -> String {
    match floor {
        Some(n) => format!("Floor {}", n),
        None => "-".to_string(),
    }
}

/// Weight for the management views, where the server sends a bare
/// number rather than the "1497 kg" string of the process response.
pub fn display_weight_kg(weight: Option<&str>) -> String {
    match weight {
        Some(w) if !w.trim().is_empty() => {
            if w.to_ascii_lowercase().contains("kg") {
                w.to_string()
            } else {
                format!("{} kg", w)
            }
        }
        _ => "-".to_string(),
    }
}

/// Best-effort timestamp formatting. The backend emits
/// "%Y-%m-%d %H:%M:%S" strings; exported SQLite rows sometimes carry
/// fractional seconds or RFC 3339. Unparseable input passes through.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Filename for a saved export, carrying the current date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("parking_data_{}.json", date.format("%Y-%m-%d"))
}

/// Human-readable byte count for staged image sizes.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_substitutes_missing_and_empty() {
        assert_eq!(dash(None), "-");
        assert_eq!(dash(Some("")), "-");
        assert_eq!(dash(Some("   ")), "-");
        assert_eq!(dash(Some("ABC123")), "ABC123");
    }

    #[test]
    fn floor_label() {
        assert_eq!(display_floor(Some(2)), "Floor 2");
        assert_eq!(display_floor(None), "-");
    }

    #[test]
    fn weight_appends_unit_only_when_bare() {
        assert_eq!(display_weight_kg(Some("1497 kg")), "1497 kg");
        assert_eq!(display_weight_kg(Some("1200")), "1200 kg");
        assert_eq!(display_weight_kg(None), "-");
    }

    #[test]
    fn timestamp_formats_known_patterns() {
        assert_eq!(
            format_timestamp("2026-08-30 14:05:09"),
            "2026-08-30 14:05"
        );
        assert_eq!(
            format_timestamp("2026-08-30 14:05:09.123456"),
            "2026-08-30 14:05"
        );
        assert_eq!(
            format_timestamp("2026-08-30T14:05:09+00:00"),
            "2026-08-30 14:05"
        );
    }

    #[test]
    fn timestamp_passes_through_unknown_input() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn bytes_scale_by_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(16 * 1024 * 1024), "16.0 MB");
    }

    #[test]
    fn export_filename_carries_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(export_filename(date), "parking_data_2026-08-30.json");
    }
}
