//! Development server command.

use std::path::Path;

use anyhow::Result;
use vitrine_server::{DevServer, DevServerConfig};
use vitrine_site::{load_site, BuildSettings};

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    if !config_path.exists() {
        anyhow::bail!(
            "Config not found: {}. Run 'vitrine init' first.",
            config_path.display()
        );
    }

    // A broken config is reported in the browser, not here.
    let settings = match load_site(config_path) {
        Ok(site) => site.build,
        Err(e) => {
            tracing::warn!("{}", e);
            BuildSettings::default()
        }
    };

    tracing::info!("Starting development server on port {}", port);

    let config = DevServerConfig {
        config_path: config_path.to_path_buf(),
        public_dir: super::config_root(config_path).join(&settings.public_dir),
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
