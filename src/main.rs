use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use serde_json::Value;
use std::{
    env,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use videowall::commands::invoke_command;
use videowall::services::PlaylistManager;

// ============================================================================
// Command Envelope
// ============================================================================

#[derive(Serialize)]
struct InvokeResponse {
    ok: bool,
    data: Option<Value>,
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

impl InvokeResponse {
    fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            kind: None,
        }
    }

    fn failure(kind: &'static str, error: String) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
            kind: Some(kind),
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

struct CliLogger {
    file: Option<Mutex<std::fs::File>>,
    level: LevelFilter,
}

impl CliLogger {
    fn new(log_dir: &Path, level: LevelFilter) -> Self {
        let file = std::fs::create_dir_all(log_dir)
            .and_then(|_| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_dir.join("videowall.log"))
            })
            .map_err(|e| eprintln!("Log file unavailable in {log_dir:?}: {e}"))
            .ok();

        Self {
            file: file.map(Mutex::new),
            level,
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now();
        let date = timestamp.format("%Y-%m-%d");
        let time = timestamp.format("%H:%M:%S");
        let target = record.target();
        let level = record.level();
        let line = format!("[{date}][{time}][{target}][{level}] {}", record.args());

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }

        // stdout carries the JSON response
        if level <= Level::Warn {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn init_logger(log_dir: &Path, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    log::set_boxed_logger(Box::new(CliLogger::new(log_dir, level)))?;
    log::set_max_level(level);
    Ok(())
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn print_usage() {
    eprintln!("Usage: videowall <command> [json-payload]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list_playlists");
    eprintln!("  get_active_playlist");
    eprintln!(r#"  create_playlist      {{"name": "...", "icon": "...", "streams": {{...}}}}"#);
    eprintln!(r#"  update_playlist      {{"id": "...", "name": "...", "icon": "...", "streams": {{...}}}}"#);
    eprintln!(r#"  delete_playlist      {{"id": "..."}}"#);
    eprintln!(r#"  set_active_playlist  {{"activePlaylist": "..."}}"#);
    eprintln!();
    eprintln!("Environment: VIDEOWALL_ROOT, VIDEOWALL_LOG_DIR, VIDEOWALL_LOG_LEVEL");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        std::process::exit(2);
    };

    // Load configuration from environment
    let install_root = match env::var("VIDEOWALL_ROOT") {
        Ok(root) => PathBuf::from(root),
        Err(_) => env::current_dir()?,
    };
    let log_dir = env::var("VIDEOWALL_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| install_root.join("storage").join("logs"));
    let level = env::var("VIDEOWALL_LOG_LEVEL")
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info);

    init_logger(&log_dir, level)?;
    log::debug!("Install root: {install_root:?}");

    let manager = PlaylistManager::for_install_root(&install_root);

    let response = match args.get(1).map(|raw| serde_json::from_str::<Value>(raw)) {
        Some(Err(e)) => InvokeResponse::failure("invalid_request", format!("Invalid payload: {e}")),
        payload => {
            let payload = payload.and_then(Result::ok).unwrap_or(Value::Null);
            match invoke_command(&manager, command, &payload) {
                Ok(data) => InvokeResponse::success(data),
                Err(e) => {
                    log::warn!("Command '{command}' failed: {e}");
                    InvokeResponse::failure(e.kind(), e.to_string())
                }
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    log::logger().flush();

    if !response.ok {
        std::process::exit(1);
    }
    Ok(())
}
