//! File watching for live reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The site config file was written
    ConfigModified(PathBuf),

    /// A file in the public directory was modified
    AssetModified(PathBuf),

    /// A public file was created
    Created(PathBuf),

    /// A public file was deleted
    Deleted(PathBuf),
}

/// What the watcher reports on.
#[derive(Debug, Clone)]
struct WatchScope {
    config_dir: PathBuf,
    config_name: OsString,
    public_dir: Option<PathBuf>,
}

impl WatchScope {
    fn new(config_path: &Path, public_dir: &Path) -> Result<Self, std::io::Error> {
        let config_name = config_path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| std::io::Error::other("config path has no file name"))?;

        // Editors replace files on save, so the parent directory is watched.
        let parent = match config_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            config_dir: parent.canonicalize()?,
            config_name,
            public_dir: public_dir.canonicalize().ok(),
        })
    }

    fn is_config(&self, path: &Path) -> bool {
        path.file_name() == Some(self.config_name.as_os_str())
            && path.parent() == Some(self.config_dir.as_path())
    }

    fn is_public(&self, path: &Path) -> bool {
        self.public_dir
            .as_ref()
            .is_some_and(|public| path.starts_with(public))
    }
}

/// Trailing-edge debounce. Events are held until the watched files have been
/// quiet for `DEBOUNCE`, then sent as one deduplicated batch.
#[derive(Debug, Default)]
struct Debouncer {
    pending: Vec<WatchEvent>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn push(&mut self, event: WatchEvent, now: Instant) {
        if !self.pending.contains(&event) {
            self.pending.push(event);
        }
        self.last_event = Some(now);
    }

    /// How long to wait before the pending batch is due; `None` when idle.
    fn wait(&self, now: Instant) -> Option<Duration> {
        self.last_event
            .map(|last| DEBOUNCE.saturating_sub(now.duration_since(last)))
    }

    /// Take the pending batch once the quiet period has passed.
    fn take_ready(&mut self, now: Instant) -> Vec<WatchEvent> {
        match self.last_event {
            Some(last) if now.duration_since(last) >= DEBOUNCE => {
                self.last_event = None;
                std::mem::take(&mut self.pending)
            }
            _ => Vec::new(),
        }
    }
}

/// File watcher for the site config and public directory.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `config_path` and, if it exists, `public_dir`.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        config_path: &Path,
        public_dir: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let scope = WatchScope::new(config_path, public_dir)?;

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(&scope.config_dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;
        if let Some(public) = &scope.public_dir {
            watcher
                .watch(public, RecursiveMode::Recursive)
                .map_err(std::io::Error::other)?;
        }

        std::thread::spawn(move || {
            let mut debouncer = Debouncer::default();

            loop {
                let received = match debouncer.wait(Instant::now()) {
                    Some(wait) => sync_rx.recv_timeout(wait),
                    None => sync_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
                };

                match received {
                    Ok(event) => {
                        let now = Instant::now();
                        for path in &event.paths {
                            if let Some(watch_event) = classify_event(path, &event.kind, &scope) {
                                debouncer.push(watch_event, now);
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => return,
                }

                for watch_event in debouncer.take_ready(Instant::now()) {
                    if async_tx.blocking_send(watch_event).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind, scope: &WatchScope) -> Option<WatchEvent> {
    use notify::EventKind;

    if scope.is_config(path) {
        return match kind {
            EventKind::Create(_) | EventKind::Modify(_) => {
                Some(WatchEvent::ConfigModified(path.to_path_buf()))
            }
            _ => None,
        };
    }

    if !scope.is_public(path) {
        return None;
    }

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => Some(WatchEvent::AssetModified(path.to_path_buf())),
        _ => None,
    }
}
