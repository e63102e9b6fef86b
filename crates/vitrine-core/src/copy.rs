//! Copy-to-clipboard feedback with auto-expiry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long the "Copied" indicator stays visible.
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(1600);

/// Identifies one activation of the copy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Which key, if any, is currently showing the "Copied" indicator.
///
/// Only one key is active at a time. Each activation hands out a ticket, and
/// only the most recent ticket may clear the indicator.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    active: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    /// Create feedback state with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `key` the active key, replacing any previous one.
    pub fn activate(&mut self, key: impl Into<String>) -> CopyTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(key.into());
        CopyTicket(self.generation)
    }

    /// Clear the indicator if `ticket` is still the latest activation.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || self.active.is_none() {
            return false;
        }
        self.active = None;
        true
    }

    /// The active key.
    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `key` is showing the indicator.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }
}

/// Errors a clipboard backend may report.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write denied: {0}")]
    Denied(String),
}

/// Platform clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, handy for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that is never available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

fn lock(feedback: &Mutex<CopyFeedback>) -> MutexGuard<'_, CopyFeedback> {
    feedback.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes values to a clipboard and drives the expiring indicator.
///
/// Expiry runs as a task on the current tokio runtime. A new copy aborts the
/// pending expiry before scheduling its own.
pub struct CopyController<C> {
    clipboard: C,
    feedback: Arc<Mutex<CopyFeedback>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<C: Clipboard> CopyController<C> {
    /// Create a controller with the default indicator delay.
    pub fn new(clipboard: C) -> Self {
        Self::with_delay(clipboard, COPY_FEEDBACK_DELAY)
    }

    /// Create a controller with a custom indicator delay.
    pub fn with_delay(clipboard: C, delay: Duration) -> Self {
        Self {
            clipboard,
            feedback: Arc::new(Mutex::new(CopyFeedback::new())),
            delay,
            pending: None,
        }
    }

    /// Copy `text` and flash the indicator for `key`.
    ///
    /// Best effort: empty text and clipboard failures are ignored and simply
    /// leave the indicator untouched. Returns whether the indicator was set.
    pub fn copy(&mut self, text: &str, key: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if let Err(e) = self.clipboard.write_text(text) {
            tracing::debug!("Clipboard write for {} ignored: {}", key, e);
            return false;
        }

        let ticket = lock(&self.feedback).activate(key);

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime; copy indicator for {} will not expire", key);
            return true;
        };

        let feedback = Arc::clone(&self.feedback);
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&feedback).expire(ticket);
        }));

        true
    }

    /// Key currently showing the indicator.
    pub fn active_key(&self) -> Option<String> {
        lock(&self.feedback).active_key().map(str::to_string)
    }

    /// Whether `key` is showing the indicator.
    pub fn is_active(&self, key: &str) -> bool {
        lock(&self.feedback).is_active(key)
    }

    /// The underlying clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

impl<C> Drop for CopyController<C> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
