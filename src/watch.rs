// ABOUTME: Watch module for monitoring source changes and rebuilding the site
// ABOUTME: Provides debounced file watching and an optional local preview server

use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;
use tiny_http::{Header, Response, Server, StatusCode};

use crate::build::{self, BuildConfig};
use crate::errors::{PodiumError, Result};
use crate::utils;

/// Configuration for watch mode
pub struct WatchConfig {
    /// Presentations source root to watch
    pub source_dir: PathBuf,

    /// Output root to rebuild into
    pub output_dir: PathBuf,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,

    /// Whether to serve the output tree over a local web server
    pub serve: bool,

    /// Port for the local web server
    pub port: u16,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("presentations"),
            output_dir: PathBuf::from("dist"),
            debounce_ms: 500,
            serve: false,
            port: 8080,
        }
    }
}

/// Start a simple HTTP server that serves files from the output root.
/// Directory URLs map to their `index.html`.
fn start_server(output_root: PathBuf, port: u16) -> Result<()> {
    let server = Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| PodiumError::WatchError(format!("Failed to start HTTP server: {}", e)))?;

    let server_arc = Arc::new(server);
    let server_thread = server_arc.clone();

    thread::spawn(move || {
        info!("HTTP server listening on http://localhost:{}", port);
        println!("HTTP server listening on http://localhost:{}", port);

        for request in server_thread.incoming_requests() {
            let url_path = request.url().trim_start_matches('/');

            let mut file_path = output_root.join(url_path);
            if file_path.is_dir() {
                file_path = file_path.join("index.html");
            }

            debug!("Request for {:?} -> {:?}", request.url(), file_path);

            if file_path.exists() && file_path.is_file() {
                match fs::read(&file_path) {
                    Ok(content) => {
                        let content_type = match file_path.extension() {
                            Some(ext) if ext.to_string_lossy() == "html" => "text/html",
                            Some(ext) if ext.to_string_lossy() == "css" => "text/css",
                            Some(ext) if ext.to_string_lossy() == "js" => "application/javascript",
                            Some(ext) if ext.to_string_lossy() == "md" => "text/markdown",
                            Some(ext) if ext.to_string_lossy() == "png" => "image/png",
                            Some(ext)
                                if ext.to_string_lossy() == "jpg"
                                    || ext.to_string_lossy() == "jpeg" =>
                            {
                                "image/jpeg"
                            }
                            _ => "application/octet-stream",
                        };

                        match Header::from_bytes("Content-Type", content_type) {
                            Ok(header) => {
                                let response = Response::from_data(content).with_header(header);
                                if let Err(e) = request.respond(response) {
                                    error!("Failed to send response: {}", e);
                                }
                            }
                            Err(_) => {
                                error!("Failed to build content-type header");
                                let _ = request.respond(Response::from_data(Vec::new()));
                            }
                        }
                    }
                    Err(e) => {
                        error!("Failed to read file {:?}: {}", file_path, e);
                        let response = Response::from_string(format!("Failed to read file: {}", e))
                            .with_status_code(StatusCode(500));
                        let _ = request.respond(response);
                    }
                }
            } else {
                let response =
                    Response::from_string("404 Not Found").with_status_code(StatusCode(404));
                let _ = request.respond(response);
            }
        }
    });

    Ok(())
}

/// Watch the presentations source tree and rebuild the site whenever a
/// relevant file changes. Rebuild failures are logged and watching continues.
pub fn watch_presentations(config: WatchConfig) -> Result<()> {
    utils::validate_directory_exists(&config.source_dir)?;

    let build_config = BuildConfig {
        source_dir: config.source_dir.clone(),
        output_dir: config.output_dir.clone(),
    };

    // Initial build
    build::build_site(&build_config)?;

    if config.serve {
        start_server(config.output_dir.clone(), config.port)?;
    }

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| PodiumError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let abs_watch_path = if config.source_dir.is_absolute() {
        config.source_dir.clone()
    } else {
        utils::get_absolute_path(&config.source_dir)?
    };

    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::Recursive)
        .map_err(|e| {
            PodiumError::WatchError(format!(
                "Failed to start watching {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    // Output tree changes are ours; never treat them as edits.
    let abs_output_path = utils::get_absolute_path(&config.output_dir).ok();

    info!("Watching for changes in {:?}", config.source_dir);
    println!(
        "Watching for changes in {:?} (Press Ctrl+C to stop)",
        config.source_dir
    );

    let mut last_processed = std::time::Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant_changes = events.iter().any(|event| {
                    event.paths.iter().any(|path| {
                        let is_relevant = is_relevant_path(path, abs_output_path.as_deref());
                        if is_relevant {
                            debug!("Detected relevant change in {:?}", path);
                        }
                        is_relevant
                    })
                });

                let now = std::time::Instant::now();
                if relevant_changes
                    && now.duration_since(last_processed)
                        > Duration::from_millis(config.debounce_ms)
                {
                    match build::build_site(&build_config) {
                        Ok(summary) => {
                            info!(
                                "Rebuilt {} presentations with {} slides",
                                summary.presentations, summary.slides
                            );
                            last_processed = now;
                        }
                        Err(e) => error!("Failed to rebuild site: {}", e),
                    }
                }
            }
            Err(e) => error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Checks whether a changed path should trigger a rebuild
fn is_relevant_path(path: &Path, output_root: Option<&Path>) -> bool {
    if let Some(output_root) = output_root {
        if path.starts_with(output_root) {
            return false;
        }
    }

    if path
        .components()
        .any(|c| c.as_os_str() == "assets" || c.as_os_str() == "shared")
    {
        return true;
    }

    match path.extension() {
        Some(ext) => {
            let ext_str = ext.to_string_lossy().to_lowercase();
            matches!(ext_str.as_str(), "md" | "html" | "css" | "js")
        }
        None => false,
    }
}
