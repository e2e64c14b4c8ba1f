use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

/// JSON envelope every parking API endpoint wraps its payload in:
/// `{success, data?, error?, message?}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Most specific failure text available: `error`, then `message`,
    /// then a generic fallback.
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Request failed".to_string())
    }

    /// Unwrap the data payload, turning a false success flag or a
    /// missing payload into an error.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(anyhow!(self.failure_message()));
        }
        self.data
            .ok_or_else(|| anyhow!("Response missing data payload"))
    }

    /// Unwrap an acknowledgement-style response (no payload expected),
    /// returning the server's message for display.
    pub fn into_message(self) -> Result<String> {
        if !self.success {
            return Err(anyhow!(self.failure_message()));
        }
        Ok(self.message.unwrap_or_else(|| "OK".to_string()))
    }
}

/// Accept a JSON string or number and normalize to a display string.
/// The backend has shipped `weight` both ways ("1497 kg" and 1200).
fn de_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub brand_before: Option<String>,
    #[serde(default)]
    pub brand_after: Option<String>,
    #[serde(default)]
    pub model_before: Option<String>,
    #[serde(default)]
    pub model_after: Option<String>,
    #[serde(default)]
    pub yolo_confidence: f64,
    #[serde(default)]
    pub ocr_texts: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleInfo {
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParkingAssignment {
    #[serde(default)]
    pub floor: Option<u8>,
    #[serde(default)]
    pub slot: Option<String>,
}

/// Server-computed recognition + slot assignment for one submitted image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub detection: Detection,
    #[serde(default)]
    pub vehicle: VehicleInfo,
    #[serde(default)]
    pub parking: ParkingAssignment,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OccupiedSlot {
    pub slot_code: String,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default, alias = "brand_corrected")]
    pub brand: Option<String>,
    #[serde(default, alias = "model_corrected")]
    pub model: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FloorStatus {
    #[serde(default)]
    pub occupied: u32,
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub occupied_slots: Vec<OccupiedSlot>,
}

/// Per-floor occupancy keyed by floor number ("1".."3" on the wire).
pub type ParkingStatus = HashMap<u8, FloorStatus>;

/// One row of the recent-activity feed. The server has shipped both
/// long (`brand_corrected`) and short (`brand`) key styles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityEntry {
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default, alias = "brand")]
    pub brand_corrected: Option<String>,
    #[serde(default, alias = "model")]
    pub model_corrected: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default, alias = "slot")]
    pub assigned_slot: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Full vehicle record used by the management views.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub brand_corrected: Option<String>,
    #[serde(default)]
    pub model_corrected: Option<String>,
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub weight: Option<String>,
    #[serde(default)]
    pub floor: Option<u8>,
    #[serde(default)]
    pub assigned_slot: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

fn default_available_slots() -> u64 {
    crate::logic::slots::TOTAL_CAPACITY as u64
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub total_processed: u64,
    #[serde(default)]
    pub current_parked: u64,
    #[serde(default = "default_available_slots")]
    pub available_slots: u64,
    #[serde(default)]
    pub today_entries: u64,
}

impl Default for SystemStats {
    fn default() -> Self {
        Self {
            total_processed: 0,
            current_parked: 0,
            available_slots: default_available_slots(),
            today_entries: 0,
        }
    }
}

#[derive(serde::Serialize)]
struct ExitRequest<'a> {
    license_plate: &'a str,
}

#[derive(Clone)]
pub struct ParkingClient {
    base_url: String,
    client: Client,
}

impl ParkingClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Submit an image for recognition and slot assignment.
    pub async fn process_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<RecognitionResult> {
        let mime = crate::logic::upload::mime_for(Path::new(file_name));
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .context("Invalid image MIME type")?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/process"))
            .multipart(form)
            .send()
            .await
            .context("Failed to submit image")?;

        let envelope: Envelope<RecognitionResult> = response
            .json()
            .await
            .context("Failed to parse process response")?;

        envelope.into_data()
    }

    pub async fn get_status(&self) -> Result<ParkingStatus> {
        let response = self
            .client
            .get(self.url("/status"))
            .send()
            .await
            .context("Failed to fetch parking status")?;

        let envelope: Envelope<ParkingStatus> = response
            .json()
            .await
            .context("Failed to parse parking status")?;

        envelope.into_data()
    }

    pub async fn get_recent(&self) -> Result<Vec<ActivityEntry>> {
        let response = self
            .client
            .get(self.url("/recent"))
            .send()
            .await
            .context("Failed to fetch recent activity")?;

        let envelope: Envelope<Vec<ActivityEntry>> = response
            .json()
            .await
            .context("Failed to parse recent activity")?;

        envelope.into_data()
    }

    /// End a parking session by license plate.
    pub async fn vehicle_exit(&self, license_plate: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/exit"))
            .json(&ExitRequest { license_plate })
            .send()
            .await
            .context("Failed to send exit request")?;

        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .context("Failed to parse exit response")?;

        envelope.into_message()
    }

    pub async fn clear_history(&self) -> Result<String> {
        let response = self
            .client
            .delete(self.url("/clear-history"))
            .send()
            .await
            .context("Failed to clear history")?;

        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .context("Failed to parse clear-history response")?;

        envelope.into_message()
    }

    pub async fn reset_system(&self) -> Result<String> {
        let response = self
            .client
            .post(self.url("/reset-system"))
            .send()
            .await
            .context("Failed to reset system")?;

        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .context("Failed to parse reset-system response")?;

        envelope.into_message()
    }

    /// Fetch the full data dump. Unlike the other endpoints this one
    /// returns raw bytes for the caller to save to disk.
    pub async fn export_data(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url("/export-data"))
            .send()
            .await
            .context("Failed to fetch export")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Export failed: {} - {}", status, text));
        }

        let bytes = response.bytes().await.context("Failed to read export body")?;
        Ok(bytes.to_vec())
    }

    pub async fn get_all_vehicles(&self) -> Result<Vec<VehicleRecord>> {
        let response = self
            .client
            .get(self.url("/all-vehicles"))
            .send()
            .await
            .context("Failed to fetch parked vehicles")?;

        let envelope: Envelope<Vec<VehicleRecord>> = response
            .json()
            .await
            .context("Failed to parse vehicle list")?;

        envelope.into_data()
    }

    pub async fn get_stats(&self) -> Result<SystemStats> {
        let response = self
            .client
            .get(self.url("/stats"))
            .send()
            .await
            .context("Failed to fetch system stats")?;

        let envelope: Envelope<SystemStats> = response
            .json()
            .await
            .context("Failed to parse system stats")?;

        envelope.into_data()
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<VehicleRecord> {
        let response = self
            .client
            .get(self.url(&format!("/vehicle/{}", id)))
            .send()
            .await
            .context("Failed to fetch vehicle detail")?;

        let envelope: Envelope<VehicleRecord> = response
            .json()
            .await
            .context("Failed to parse vehicle detail")?;

        envelope.into_data()
    }

    pub async fn delete_vehicle(&self, id: i64) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&format!("/vehicle/{}", id)))
            .send()
            .await
            .context("Failed to delete vehicle")?;

        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .context("Failed to parse delete response")?;

        envelope.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_prefers_error_over_message() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(
            r#"{"success": false, "error": "Vehicle not found", "message": "nope"}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err().to_string(),
            "Vehicle not found"
        );
    }

    #[test]
    fn envelope_falls_back_to_message() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "Processing failed"}"#).unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err().to_string(),
            "Processing failed"
        );
    }

    #[test]
    fn envelope_generic_fallback_when_no_detail() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap_err().to_string(), "Request failed");
    }

    #[test]
    fn weight_accepts_string_and_number() {
        let from_string: VehicleInfo =
            serde_json::from_str(r#"{"license_plate": "51A12345", "weight": "1497 kg"}"#).unwrap();
        assert_eq!(from_string.weight.as_deref(), Some("1497 kg"));

        let from_number: VehicleInfo =
            serde_json::from_str(r#"{"license_plate": "ABC123", "weight": 1200}"#).unwrap();
        assert_eq!(from_number.weight.as_deref(), Some("1200"));
    }

    #[test]
    fn activity_entry_accepts_short_keys() {
        let entry: ActivityEntry = serde_json::from_str(
            r#"{"brand": "Toyota", "model": "Corolla", "slot": "I.B", "entry_time": "2026-08-30 10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.brand_corrected.as_deref(), Some("Toyota"));
        assert_eq!(entry.model_corrected.as_deref(), Some("Corolla"));
        assert_eq!(entry.assigned_slot.as_deref(), Some("I.B"));
    }

    #[test]
    fn status_map_parses_string_floor_keys() {
        let status: ParkingStatus = serde_json::from_str(
            r#"{"1": {"occupied": 3, "available": 17, "total": 20, "occupied_slots": []},
                "2": {"occupied": 0, "available": 20, "total": 20, "occupied_slots": []},
                "3": {"occupied": 20, "available": 0, "total": 20, "occupied_slots": []}}"#,
        )
        .unwrap();
        assert_eq!(status.get(&1).unwrap().occupied, 3);
        assert_eq!(status.get(&3).unwrap().available, 0);
    }
}
