//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use vitrine_site::load_site;
use vitrine_static::{AssetPipeline, BuildConfig, StaticBuilder, TemplateEngine};

use crate::reload::{reload_client_script, ReloadHub, ReloadMessage, RELOAD_PATH};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site config file
    pub config_path: PathBuf,

    /// Directory served for images and other static files
    pub public_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("site.toml"),
            public_dir: PathBuf::from("public"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    reload: ReloadHub,
}

type SharedState = Arc<RwLock<ServerState>>;

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| ServerError::InvalidAddress(raw_addr.clone()))?;

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            reload: ReloadHub::new(),
        }));

        let (watcher, mut rx) = FileWatcher::new(&self.config.config_path, &self.config.public_dir)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = Router::new()
            .route("/", get(index_handler))
            .route("/index.html", get(index_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler))
            .route(RELOAD_PATH, get(ws_handler))
            .fallback_service(ServeDir::new(&self.config.public_dir))
            .with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    let state = state.read().await;

    match event {
        WatchEvent::ConfigModified(path) => {
            tracing::info!("Config modified: {}", path.display());

            match load_site(&state.config.config_path) {
                Ok(_) => state.reload.send(ReloadMessage::Reload),
                Err(e) => {
                    tracing::warn!("{}", e);
                    state.reload.send(ReloadMessage::ConfigError {
                        message: e.to_string(),
                    });
                }
            }
        }

        WatchEvent::AssetModified(path) | WatchEvent::Created(path) | WatchEvent::Deleted(path) => {
            tracing::debug!("Public file changed: {}", path.display());
            state.reload.send(ReloadMessage::Reload);
        }
    }
}

/// Render the landing page from the current config with the reload client injected.
///
/// A config that fails to load renders an error page instead, so the browser
/// stays connected and reloads once the file is fixed.
fn render_index(config_path: &Path) -> Result<String, String> {
    let scripts = vec![reload_client_script(RELOAD_PATH)];

    let mut site = match load_site(config_path) {
        Ok(site) => site,
        Err(e) => {
            let engine = TemplateEngine::new().map_err(|e| e.to_string())?;
            return engine
                .render_error("Site config error", &e.to_string(), &scripts)
                .map_err(|e| e.to_string());
        }
    };

    // Assets are served from this server, not the deployed origin.
    site.site.base_url = "/".to_string();

    let build = BuildConfig {
        minify: false,
        ..BuildConfig::default()
    };
    let builder = StaticBuilder::new(site, build).map_err(|e| e.to_string())?;

    builder.render_html(&[], scripts).map_err(|e| e.to_string())
}

/// Handler for the index page.
async fn index_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let config_path = state.read().await.config.config_path.clone();

    match render_index(&config_path) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

async fn css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        AssetPipeline::generate_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

fn encode(msg: &ReloadMessage) -> Option<Message> {
    match serde_json::to_string(msg) {
        Ok(json) => Some(Message::Text(json.into())),
        Err(e) => {
            tracing::warn!("Failed to encode reload message: {}", e);
            None
        }
    }
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = {
        let state = state.read().await;
        state.reload.subscribe()
    };

    if let Some(msg) = encode(&ReloadMessage::Connected) {
        if socket.send(msg).await.is_err() {
            return;
        }
    }

    while let Ok(reload_msg) = rx.recv().await {
        let Some(msg) = encode(&reload_msg) else {
            continue;
        };
        if socket.send(msg).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.config_path, PathBuf::from("site.toml"));
    }

    #[test]
    fn renders_page_with_reload_client() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site]\ntitle = \"Shabito\"\n").unwrap();

        let html = render_index(&config).unwrap();

        assert!(html.contains("<title>Shabito</title>"));
        assert!(html.contains("new WebSocket"));
    }

    #[test]
    fn renders_error_page_for_invalid_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site\ntitle = ").unwrap();

        let html = render_index(&config).unwrap();

        assert!(html.contains("Site config error"));
        assert!(html.contains("Invalid TOML"));
        assert!(html.contains("new WebSocket"));
    }

    #[tokio::test]
    async fn config_errors_are_broadcast() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "not = [valid").unwrap();

        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();
        let state = Arc::new(RwLock::new(ServerState {
            config: DevServerConfig {
                config_path: config.clone(),
                ..Default::default()
            },
            reload: hub,
        }));

        handle_watch_event(&state, WatchEvent::ConfigModified(config.clone())).await;
        assert!(matches!(
            rx.try_recv(),
            Ok(ReloadMessage::ConfigError { .. })
        ));

        fs::write(&config, "[site]\ntitle = \"Fixed\"\n").unwrap();
        handle_watch_event(&state, WatchEvent::ConfigModified(config)).await;
        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);
    }
}
