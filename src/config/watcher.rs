// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher that reloads request files as they are edited.
//!
//! Modifications are debounced so that an editor's save (often several
//! write events) produces a single reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::RequestFile;

/// Events emitted by the request watcher
#[derive(Debug, Clone)]
pub enum RequestEvent {
    /// A request file was modified and successfully reloaded
    Reloaded(PathBuf, Box<RequestFile>),
    /// A request file was modified but failed to load
    Error(String),
    /// A request file was removed
    Removed(PathBuf),
}

/// Request file watcher with debouncing
pub struct RequestWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<RequestEvent>,
    watched_path: PathBuf,
}

fn is_request_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml" || ext == "toml")
}

fn reload(path: PathBuf) -> RequestEvent {
    match RequestFile::load(&path) {
        Ok(file) => {
            debug!(path = ?path, "request reloaded");
            RequestEvent::Reloaded(path, Box::new(file))
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "request reload failed");
            RequestEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

impl RequestWatcher {
    /// Watch a request file, or every request file in a directory.
    ///
    /// `debounce_ms` defaults to 500.
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<RequestEvent>, Receiver<RequestEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        let target = watched_path.clone();
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending_paths: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(RequestEvent::Removed(path));
                            }
                        }
                        EventKind::Create(_) | EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending_paths.contains(&path) {
                                    pending_paths.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let settled = last_event_time
                            .map_or(false, |last| last.elapsed() >= debounce_duration);
                        if settled {
                            for path in pending_paths.drain(..) {
                                if is_request_file(&path) || path == target {
                                    let _ = event_tx.send(reload(path));
                                }
                            }
                            last_event_time = None;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        // Watcher was dropped
                        break;
                    }
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&self) -> Option<RequestEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending events
    pub fn recv_all(&self) -> Vec<RequestEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next event is received
    pub fn recv(&self) -> Option<RequestEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

/// Load a request file and check that its selections name a real scale
pub fn validate_request<P: AsRef<Path>>(path: P) -> Result<RequestFile> {
    let file = RequestFile::load(path)?;
    file.request.resolve()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_validate_request() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("request.yaml");
        fs::write(&file_path, "request:\n  root: A\n  scale: Harmonic Minor\n").unwrap();

        let file = validate_request(&file_path).unwrap();
        assert_eq!(file.request.root, "A");
    }

    #[test]
    fn test_validate_rejects_unknown_scale() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("request.toml");
        fs::write(&file_path, "[request]\nroot = \"C\"\nscale = \"Bebop\"\n").unwrap();

        let err = validate_request(&file_path).unwrap_err();
        assert!(err.to_string().contains("Bebop"));
    }

    #[test]
    fn test_validate_invalid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.yaml");
        fs::write(&file_path, "this is not valid yaml: [").unwrap();

        assert!(validate_request(&file_path).is_err());
    }

    #[test]
    fn test_is_request_file() {
        assert!(is_request_file(Path::new("a.yaml")));
        assert!(is_request_file(Path::new("a.yml")));
        assert!(is_request_file(Path::new("a.toml")));
        assert!(!is_request_file(Path::new("a.txt")));
        assert!(!is_request_file(Path::new("a")));
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempdir().unwrap();
        let watcher = RequestWatcher::new(dir.path(), Some(100)).unwrap();
        assert_eq!(watcher.watched_path(), dir.path());
        assert!(watcher.recv_all().is_empty());
    }

    #[test]
    fn test_watcher_detects_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("detect.yaml");
        fs::write(&file_path, "request:\n  root: C\n").unwrap();

        let watcher = RequestWatcher::new(dir.path(), Some(100)).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&file_path)
            .unwrap();
        file.write_all(b"request:\n  root: G\n  scale: Mixolydian\n").unwrap();
        file.flush().unwrap();
        drop(file);

        std::thread::sleep(Duration::from_millis(300));

        let events = watcher.recv_all();
        if let Some(RequestEvent::Reloaded(_, file)) = events
            .iter()
            .find(|e| matches!(e, RequestEvent::Reloaded(..)))
        {
            assert_eq!(file.request.root, "G");
            assert_eq!(file.request.scale, "Mixolydian");
        }
        // File events are not guaranteed to arrive in time on every CI host
    }
}
