//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vitrine_site::load_site;
use vitrine_static::{BuildConfig, StaticBuilder};

/// Run the build command. CLI flags override the `[build]` section.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building landing page...");

    let site = load_site(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    tracing::info!("Loaded config from {}", config_path.display());

    let mut config = BuildConfig::from_settings(&site.build, &super::config_root(config_path));
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(site, config)?.build().await?;

    tracing::info!(
        "Built {} page with {} links and {} public files in {}ms",
        result.pages,
        result.links,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_into_config_relative_output() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site]\ntitle = \"Shabito\"\n\n[build]\noutput = \"public_html\"\n")
            .unwrap();

        run(&config, None, Some(false)).await.unwrap();

        let html = fs::read_to_string(temp.path().join("public_html/index.html")).unwrap();
        assert!(html.contains("<title>Shabito</title>"));
    }

    #[tokio::test]
    async fn output_flag_overrides_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[build]\noutput = \"ignored\"\n").unwrap();
        let out = temp.path().join("custom");

        run(&config, Some(out.clone()), None).await.unwrap();

        assert!(out.join("index.html").exists());
        assert!(!temp.path().join("ignored").exists());
    }

    #[tokio::test]
    async fn fails_on_missing_config() {
        let temp = tempdir().unwrap();

        let result = run(&temp.path().join("site.toml"), None, None).await;

        assert!(result.is_err());
    }
}
