use anyhow::{Context, Result};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{
    ActivityEntry, ParkingClient, ParkingStatus, RecognitionResult, SystemStats, VehicleRecord,
};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (process, exit, management)
    Medium, // Background polling (status, recent, stats)
}

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for in-flight tracking. Read endpoints share a key
/// per target; write operations are always unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Status,
    Recent,
    Stats,
    AllVehicles,
    Vehicle { id: i64 },
    Write { seq: u64 },
}

impl RequestKey {
    fn next_write() -> Self {
        RequestKey::Write {
            seq: WRITE_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Submit a staged image for recognition
    ProcessImage { path: PathBuf },

    /// Per-floor occupancy
    GetStatus,

    /// Recent activity feed
    GetRecent,

    /// End a parking session
    VehicleExit { license_plate: String },

    /// Purge the activity history
    ClearHistory,

    /// Full system reset
    ResetSystem,

    /// Fetch the data dump and save it locally
    ExportData,

    /// All currently parked vehicles
    GetAllVehicles,

    /// Aggregate counters
    GetStats,

    /// Single vehicle detail
    GetVehicle { id: i64 },

    /// Remove a vehicle record
    DeleteVehicle { id: i64 },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::GetStatus | ApiRequest::GetRecent | ApiRequest::GetStats => {
                Priority::Medium
            }
            _ => Priority::High,
        }
    }

    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::GetStatus => RequestKey::Status,
            ApiRequest::GetRecent => RequestKey::Recent,
            ApiRequest::GetStats => RequestKey::Stats,
            ApiRequest::GetAllVehicles => RequestKey::AllVehicles,
            ApiRequest::GetVehicle { id } => RequestKey::Vehicle { id: *id },
            _ => RequestKey::next_write(),
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ProcessResult {
        result: Result<RecognitionResult>,
    },

    StatusResult {
        status: Result<ParkingStatus>,
    },

    RecentResult {
        entries: Result<Vec<ActivityEntry>>,
    },

    ExitResult {
        message: Result<String>,
    },

    ClearHistoryResult {
        message: Result<String>,
    },

    ResetResult {
        message: Result<String>,
    },

    /// Path the export was saved to on success
    ExportResult {
        saved_to: Result<PathBuf>,
    },

    AllVehiclesResult {
        vehicles: Result<Vec<VehicleRecord>>,
    },

    StatsResult {
        stats: Result<SystemStats>,
    },

    VehicleDetailResult {
        vehicle: Result<VehicleRecord>,
    },

    DeleteVehicleResult {
        id: i64,
        message: Result<String>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: ParkingClient,
    download_dir: PathBuf,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: ParkingClient,
        download_dir: PathBuf,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            download_dir,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    /// Add a request to the queue, high priority first. Duplicate reads
    /// already in flight are dropped so a slow poll cannot pile up.
    fn enqueue(&mut self, request: ApiRequest) {
        let key = request.key();
        if !matches!(key, RequestKey::Write { .. })
            && (self.in_flight.contains(&key)
                || self.request_queue.iter().any(|(r, _)| r.key() == key))
        {
            return;
        }

        let priority = request.priority();
        // High priority ahead of medium, FIFO within each class
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let download_dir = self.download_dir.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries; a failed action requires explicit
        // re-invocation by the user.
        tokio::spawn(async move {
            let response = Self::execute_request(&client, &download_dir, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(
        client: &ParkingClient,
        download_dir: &std::path::Path,
        request: ApiRequest,
    ) -> ApiResponse {
        match request {
            ApiRequest::ProcessImage { path } => {
                let result = Self::process_image(client, &path).await;
                ApiResponse::ProcessResult { result }
            }

            ApiRequest::GetStatus => ApiResponse::StatusResult {
                status: client.get_status().await,
            },

            ApiRequest::GetRecent => ApiResponse::RecentResult {
                entries: client.get_recent().await,
            },

            ApiRequest::VehicleExit { license_plate } => ApiResponse::ExitResult {
                message: client.vehicle_exit(&license_plate).await,
            },

            ApiRequest::ClearHistory => ApiResponse::ClearHistoryResult {
                message: client.clear_history().await,
            },

            ApiRequest::ResetSystem => ApiResponse::ResetResult {
                message: client.reset_system().await,
            },

            ApiRequest::ExportData => ApiResponse::ExportResult {
                saved_to: Self::export_data(client, download_dir).await,
            },

            ApiRequest::GetAllVehicles => ApiResponse::AllVehiclesResult {
                vehicles: client.get_all_vehicles().await,
            },

            ApiRequest::GetStats => ApiResponse::StatsResult {
                stats: client.get_stats().await,
            },

            ApiRequest::GetVehicle { id } => ApiResponse::VehicleDetailResult {
                vehicle: client.get_vehicle(id).await,
            },

            ApiRequest::DeleteVehicle { id } => ApiResponse::DeleteVehicleResult {
                id,
                message: client.delete_vehicle(id).await,
            },
        }
    }

    async fn process_image(client: &ParkingClient, path: &std::path::Path) -> Result<RecognitionResult> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string());
        client.process_image(&file_name, bytes).await
    }

    /// Fetch the export and save it with a dated filename.
    async fn export_data(client: &ParkingClient, download_dir: &std::path::Path) -> Result<PathBuf> {
        let bytes = client.export_data().await?;
        let filename = crate::logic::format::export_filename(chrono::Local::now().date_naive());
        let target = download_dir.join(filename);
        tokio::fs::write(&target, bytes)
            .await
            .with_context(|| format!("Failed to save export to {}", target.display()))?;
        Ok(target)
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: ParkingClient,
    download_dir: PathBuf,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, download_dir, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    while !service.request_queue.is_empty()
                        && service.in_flight.len() < service.max_concurrent
                    {
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
