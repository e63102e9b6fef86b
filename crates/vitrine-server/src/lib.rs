//! Development server with live reload for vitrine landing pages.
//!
//! Re-renders the page from the site configuration on every request and
//! pushes reload notifications over a WebSocket when the config or the
//! public directory changes.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{reload_client_script, ReloadHub, ReloadMessage};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
