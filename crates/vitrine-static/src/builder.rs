//! Static site builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use vitrine_site::{BuildSettings, SiteConfig};

use crate::assets::AssetPipeline;
use crate::templates::{Context, TemplateEngine};
use crate::view::{link_report, PageView};

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Static files copied verbatim into the output
    pub public_dir: PathBuf,

    /// Minify HTML and CSS output
    pub minify: bool,

    /// Extra stylesheets copied into `assets/styles/`
    pub styles: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_settings(&BuildSettings::default(), Path::new("."))
    }
}

impl BuildConfig {
    /// Resolve `[build]` settings relative to the directory holding the config file.
    pub fn from_settings(settings: &BuildSettings, root: &Path) -> Self {
        Self {
            output_dir: root.join(&settings.output),
            public_dir: root.join(&settings.public_dir),
            minify: settings.minify,
            styles: settings.styles.iter().map(|s| root.join(s)).collect(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of resolved outbound links
    pub links: usize,

    /// Number of public files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    site: SiteConfig,
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(site: SiteConfig, config: BuildConfig) -> Result<Self, BuildError> {
        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Self {
            site,
            config,
            templates,
        })
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let styles = self.copy_styles()?;
        let html = self.render_html(&styles, Vec::new())?;
        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        self.generate_assets()?;
        let assets = self.copy_public()?;
        let links = self.generate_link_manifest()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: 1,
            links,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render the landing page with extra stylesheets and inline scripts.
    pub fn render_html(&self, styles: &[String], scripts: Vec<String>) -> Result<String, BuildError> {
        let context = Context {
            page: PageView::from_config(&self.site),
            styles: styles.to_vec(),
            scripts,
        };

        let html = self
            .templates
            .render_landing(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        if self.config.minify {
            Ok(AssetPipeline::minify_html(&html))
        } else {
            Ok(html)
        }
    }

    /// Generate the stylesheet and runtime script.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Keeping unminified CSS: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy configured stylesheets, returning their paths relative to the base URL.
    ///
    /// Stylesheets land in `assets/styles/`, apart from the generated assets.
    /// Two stylesheets sharing a file name are rejected.
    fn copy_styles(&self) -> Result<Vec<String>, BuildError> {
        let styles_dir = self.config.output_dir.join("assets").join("styles");
        let mut names = HashSet::new();
        let mut hrefs = Vec::new();

        for source_path in &self.config.styles {
            if !source_path.exists() {
                tracing::warn!("Stylesheet not found: {}", source_path.display());
                continue;
            }

            let filename = source_path
                .file_name()
                .and_then(|f| f.to_str())
                .ok_or_else(|| {
                    BuildError::ReadError(format!(
                        "Invalid stylesheet path: {}",
                        source_path.display()
                    ))
                })?;
            if !names.insert(filename.to_string()) {
                return Err(BuildError::WriteError(format!(
                    "Duplicate stylesheet name {}: {}",
                    filename,
                    source_path.display()
                )));
            }

            let content = fs::read_to_string(source_path).map_err(|e| {
                BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
            })?;
            let content = if self.config.minify {
                AssetPipeline::minify_css(&content).unwrap_or(content)
            } else {
                content
            };

            fs::create_dir_all(&styles_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;
            fs::write(styles_dir.join(filename), content)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;
            tracing::info!("Copied stylesheet from {}", source_path.display());
            hrefs.push(format!("assets/styles/{}", filename));
        }

        Ok(hrefs)
    }

    /// Copy the public directory into the output in parallel.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let public_dir = &self.config.public_dir;
        if !public_dir.is_dir() {
            tracing::debug!("No public directory at {}", public_dir.display());
            return Ok(0);
        }

        // The output may live inside the public directory.
        let output_dir = self
            .config
            .output_dir
            .canonicalize()
            .unwrap_or_else(|_| self.config.output_dir.clone());

        let files: Vec<(PathBuf, PathBuf)> = WalkDir::new(public_dir)
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .canonicalize()
                    .map(|path| path != output_dir)
                    .unwrap_or(true)
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(public_dir).ok()?.to_path_buf();
                Some((entry.path().to_path_buf(), relative))
            })
            .collect();

        let results: Vec<Result<(), BuildError>> = files
            .par_iter()
            .map(|(source, relative)| {
                let target = self.config.output_dir.join(relative);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| BuildError::WriteError(e.to_string()))?;
                }
                fs::copy(source, &target).map_err(|e| {
                    BuildError::WriteError(format!("{}: {}", source.display(), e))
                })?;
                Ok(())
            })
            .collect();

        for result in results {
            result?;
        }

        tracing::debug!("Copied {} public files", files.len());
        Ok(files.len())
    }

    /// Write `links.json`, returning the number of resolved links.
    fn generate_link_manifest(&self) -> Result<usize, BuildError> {
        let entries = link_report(&self.site);
        let resolved = entries.iter().filter(|e| e.href.is_some()).count();

        for entry in entries.iter().filter(|e| e.href.is_none()) {
            tracing::debug!("Hidden link: {} / {}", entry.section, entry.name);
        }

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;
        fs::write(self.config.output_dir.join("links.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(resolved)
    }

    /// Write `robots.txt`, plus `sitemap.xml` when the base URL is absolute.
    ///
    /// Sitemaps only accept absolute URLs, so a relative base URL gets no
    /// sitemap and no `Sitemap:` line.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let base_url = PageView::from_config(&self.site).base_url;
        let mut robots = "User-agent: *\nAllow: /\n".to_string();

        if is_absolute_url(&base_url) {
            let sitemap = format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}</loc>
  </url>
</urlset>"#,
                base_url
            );

            fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;
            robots.push_str(&format!("Sitemap: {}sitemap.xml\n", base_url));
        } else {
            tracing::debug!("Skipping sitemap for relative base URL {}", base_url);
        }

        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

fn is_absolute_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use vitrine_site::{parse_site, ConfigFormat};

    const SITE: &str = r#"
[site]
title = "Shabito"
base_url = "https://shabito.net"

[contact]
email = "hello@shabito.net"
x_handle = "byshabito"

[support]
onchain_address = "bc1qe5zla3d"
"#;

    fn builder(root: &Path, minify: bool) -> StaticBuilder {
        let site = parse_site(SITE, ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: root.join("dist"),
            public_dir: root.join("public"),
            minify,
            styles: vec![],
        };
        StaticBuilder::new(site, config).unwrap()
    }

    #[tokio::test]
    async fn builds_landing_page() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = builder(temp.path(), false).build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.assets, 0);
        assert!(out.join("index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title>Shabito</title>"));
        assert!(html.contains("<code>support.chaturbate_username</code>"));
    }

    #[tokio::test]
    async fn writes_link_manifest() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = builder(temp.path(), true).build().await.unwrap();

        let json = fs::read_to_string(out.join("links.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

        let x = entries.iter().find(|e| e["name"] == "X").unwrap();
        assert_eq!(x["href"], "https://x.com/byshabito");

        let onchain = entries.iter().find(|e| e["name"] == "On-chain").unwrap();
        assert_eq!(onchain["href"], "bitcoin:bc1qe5zla3d");

        let chaturbate = entries
            .iter()
            .find(|e| e["section"] == "support" && e["name"] == "Chaturbate")
            .unwrap();
        assert!(chaturbate["href"].is_null());

        let resolved = entries.iter().filter(|e| !e["href"].is_null()).count();
        assert_eq!(result.links, resolved);
    }

    #[tokio::test]
    async fn writes_sitemap_and_robots() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        builder(temp.path(), true).build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://shabito.net/</loc>"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://shabito.net/sitemap.xml"));
    }

    #[tokio::test]
    async fn copies_public_files() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("assets/apps")).unwrap();
        fs::write(public.join("favicon.ico"), b"icon").unwrap();
        fs::write(public.join("assets/apps/showmoji.svg"), "<svg></svg>").unwrap();

        let result = builder(temp.path(), true).build().await.unwrap();

        assert_eq!(result.assets, 2);
        let out = temp.path().join("dist");
        assert!(out.join("favicon.ico").exists());
        assert_eq!(
            fs::read_to_string(out.join("assets/apps/showmoji.svg")).unwrap(),
            "<svg></svg>"
        );
    }

    #[tokio::test]
    async fn skips_output_nested_in_public() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("dist")).unwrap();
        fs::write(public.join("dist/stale.html"), "old").unwrap();
        fs::write(public.join("robots-extra.txt"), "x").unwrap();

        let site = parse_site(SITE, ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: public.join("dist"),
            public_dir: public.clone(),
            minify: false,
            styles: vec![],
        };

        let result = StaticBuilder::new(site, config)
            .unwrap()
            .build()
            .await
            .unwrap();

        assert_eq!(result.assets, 1);
    }

    #[tokio::test]
    async fn copies_configured_stylesheets() {
        let temp = tempdir().unwrap();
        let style = temp.path().join("brand.css");
        fs::write(&style, ".brand { color: red; }").unwrap();

        let site = parse_site(SITE, ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: temp.path().join("dist"),
            public_dir: temp.path().join("public"),
            minify: false,
            styles: vec![style, temp.path().join("missing.css")],
        };

        StaticBuilder::new(site, config)
            .unwrap()
            .build()
            .await
            .unwrap();

        let out = temp.path().join("dist");
        assert!(out.join("assets/styles/brand.css").exists());
        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("brand.css"));
    }

    #[tokio::test]
    async fn stylesheet_named_main_keeps_its_rules() {
        let temp = tempdir().unwrap();
        let style = temp.path().join("main.css");
        fs::write(&style, ".brand-accent { color: red; }").unwrap();

        let site = parse_site(SITE, ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: temp.path().join("dist"),
            public_dir: temp.path().join("public"),
            minify: false,
            styles: vec![style],
        };

        StaticBuilder::new(site, config)
            .unwrap()
            .build()
            .await
            .unwrap();

        let out = temp.path().join("dist");
        let user = fs::read_to_string(out.join("assets/styles/main.css")).unwrap();
        assert!(user.contains(".brand-accent"));
        let bundled = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert!(!bundled.contains(".brand-accent"));
    }

    #[tokio::test]
    async fn rejects_stylesheets_sharing_a_name() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        fs::write(temp.path().join("a/theme.css"), ".a {}").unwrap();
        fs::write(temp.path().join("b/theme.css"), ".b {}").unwrap();

        let site = parse_site(SITE, ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: temp.path().join("dist"),
            public_dir: temp.path().join("public"),
            minify: false,
            styles: vec![temp.path().join("a/theme.css"), temp.path().join("b/theme.css")],
        };

        let result = StaticBuilder::new(site, config).unwrap().build().await;

        assert!(matches!(result, Err(BuildError::WriteError(_))));
    }

    #[tokio::test]
    async fn relative_base_url_skips_sitemap() {
        let temp = tempdir().unwrap();
        let site = parse_site("[site]\ntitle = \"Shabito\"\n", ConfigFormat::Toml).unwrap();
        let config = BuildConfig {
            output_dir: temp.path().join("dist"),
            public_dir: temp.path().join("public"),
            minify: false,
            styles: vec![],
        };

        StaticBuilder::new(site, config)
            .unwrap()
            .build()
            .await
            .unwrap();

        let out = temp.path().join("dist");
        assert!(!out.join("sitemap.xml").exists());
        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert_eq!(robots, "User-agent: *\nAllow: /\n");
    }

    #[test]
    fn resolves_settings_relative_to_root() {
        let settings = BuildSettings {
            styles: vec!["theme.css".to_string()],
            ..Default::default()
        };

        let config = BuildConfig::from_settings(&settings, Path::new("/srv/site"));

        assert_eq!(config.output_dir, PathBuf::from("/srv/site/dist"));
        assert_eq!(config.public_dir, PathBuf::from("/srv/site/public"));
        assert_eq!(config.styles, vec![PathBuf::from("/srv/site/theme.css")]);
        assert!(config.minify);
    }
}
