use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Parking Management TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/parktui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: ~/.config/parktui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;

use api::ParkingClient;
use config::Config;
use logic::schedule::RefreshScheduler;
use model::StagedImage;
use services::api::{ApiRequest, ApiResponse};

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/parktui-debug.log")
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { reason } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,
    scheduler: RefreshScheduler,

    image_picker: Option<ratatui_image::picker::Picker>,
    preview_tx: tokio::sync::mpsc::UnboundedSender<(PathBuf, ImagePreviewState)>,
    preview_rx: tokio::sync::mpsc::UnboundedReceiver<(PathBuf, ImagePreviewState)>,

    /// Preview of the currently staged image. Kept outside the Model
    /// because the graphics protocol state is not Clone.
    preview: Option<ImagePreviewState>,
}

impl App {
    fn new(config: &Config) -> Self {
        let client = ParkingClient::new(config.base_url.clone());
        let (api_tx, api_rx) =
            services::api::spawn_api_service(client, config.resolved_download_dir());

        let (preview_tx, preview_rx) = tokio::sync::mpsc::unbounded_channel();

        // Initialize image preview protocol picker
        let image_picker = if config.image_preview {
            let picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image preview: failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };
            Some(picker)
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        let scheduler = RefreshScheduler::new(
            Duration::from_secs(config.status_poll_secs),
            Duration::from_secs(config.stats_poll_secs),
            Instant::now(),
        );

        let app = App {
            model: model::Model::new(),
            api_tx,
            api_rx,
            scheduler,
            image_picker,
            preview_tx,
            preview_rx,
            preview: None,
        };

        // Initial data load
        let _ = app.api_tx.send(ApiRequest::GetStatus);
        let _ = app.api_tx.send(ApiRequest::GetRecent);
        let _ = app.api_tx.send(ApiRequest::GetStats);

        app
    }

    /// Re-fetch everything the panels display. Used by the manual
    /// refresh key and after every state-changing action.
    fn request_data_refresh(&mut self) {
        let _ = self.api_tx.send(ApiRequest::GetStatus);
        let _ = self.api_tx.send(ApiRequest::GetRecent);
        let _ = self.api_tx.send(ApiRequest::GetStats);
        self.scheduler.force();
    }

    fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Validate and stage an image, kicking off a background decode for
    /// the preview panel.
    fn stage_image(&mut self, raw_path: &str) {
        let path = PathBuf::from(raw_path);

        let size = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => {
                self.model.show_error(format!("{} is not a file", path.display()));
                return;
            }
            Err(e) => {
                self.model
                    .show_error(format!("Cannot read {}: {}", path.display(), e));
                return;
            }
        };

        if let Err(e) = logic::upload::validate_image(&path, size) {
            self.model.show_error(e.to_string());
            return;
        }

        self.model.session.staged_image = Some(StagedImage {
            path: path.clone(),
            file_size: size,
        });
        self.preview = None;

        let Some(picker) = self.image_picker.clone() else {
            return;
        };

        self.preview = Some(ImagePreviewState::Loading);
        let preview_tx = self.preview_tx.clone();
        tokio::spawn(async move {
            let state = match tokio::task::spawn_blocking({
                let path = path.clone();
                move || image::open(&path)
            })
            .await
            {
                Ok(Ok(img)) => {
                    log_debug(&format!(
                        "Preview: decoded {} ({}x{})",
                        path.display(),
                        img.width(),
                        img.height()
                    ));
                    ImagePreviewState::Ready {
                        protocol: picker.new_resize_protocol(img),
                    }
                }
                Ok(Err(e)) => ImagePreviewState::Failed {
                    reason: e.to_string(),
                },
                Err(e) => ImagePreviewState::Failed {
                    reason: e.to_string(),
                },
            };
            let _ = preview_tx.send((path, state));
        });
    }

    /// Handle API responses from background worker
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }
}

fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/parktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("parktui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config file; built-in defaults apply
    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.model.ui.expire_toasts(Instant::now());

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Process preview decodes; a stale result for a replaced image
        // is dropped
        while let Ok((path, state)) = app.preview_rx.try_recv() {
            let current = app
                .model
                .session
                .staged_image
                .as_ref()
                .map(|s| s.path == path)
                .unwrap_or(false);
            if current {
                app.preview = Some(state);
            } else {
                log_debug(&format!("Dropping stale preview for {}", path.display()));
            }
        }

        // Background polling
        let due = app.scheduler.poll(Instant::now());
        if due.status {
            let _ = app.api_tx.send(ApiRequest::GetStatus);
            let _ = app.api_tx.send(ApiRequest::GetRecent);
        }
        if due.stats {
            let _ = app.api_tx.send(ApiRequest::GetStats);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
