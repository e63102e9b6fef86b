//! WebSocket-based live reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Path of the live reload WebSocket endpoint.
pub const RELOAD_PATH: &str = "/__reload";

/// Messages sent to connected pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Full page reload
    Reload,

    /// The site config no longer parses
    ConfigError {
        /// Loader error, shown in an overlay
        message: String,
    },

    /// Connection established
    Connected,
}

/// Hub for broadcasting reload messages to all connected pages.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    /// Create a new reload hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected pages.
    pub fn send(&self, msg: ReloadMessage) {
        // No receivers is not an error.
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Get the number of connected pages.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side live reload script.
///
/// The socket URL is derived from the page location, so the script works
/// behind any host and port.
pub fn reload_client_script(path: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
  const ws = new WebSocket(scheme + location.host + '{}');

  function showOverlay(message) {{
    let overlay = document.getElementById('vitrine-error-overlay');
    if (!overlay) {{
      overlay = document.createElement('pre');
      overlay.id = 'vitrine-error-overlay';
      overlay.style.cssText = 'position:fixed;inset:auto 1rem 1rem 1rem;z-index:9999;margin:0;padding:1rem;' +
        'border-radius:0.5rem;background:#881337;color:#fff1f2;white-space:pre-wrap;font:13px ui-monospace,monospace;';
      document.body.appendChild(overlay);
    }}
    overlay.textContent = 'Site config error\n\n' + message;
  }}

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'reload':
        location.reload();
        break;

      case 'config_error':
        showOverlay(msg.message);
        break;

      case 'connected':
        console.log('[vitrine] Live reload connected');
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[vitrine] Disconnected, retrying');
    setTimeout(function() {{ location.reload(); }}, 1000);
  }};
}})();
"#,
        path
    )
}
