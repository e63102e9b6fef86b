//! Loading site configuration from disk.

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SiteError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SiteError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Errors that can occur when loading a site configuration.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML in site config: {0}")]
    InvalidToml(String),

    #[error("Invalid YAML in site config: {0}")]
    InvalidYaml(String),

    #[error("Unsupported config format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Parse a site configuration from source text.
pub fn parse_site(source: &str, format: ConfigFormat) -> Result<SiteConfig, SiteError> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str(source).map_err(|e| SiteError::InvalidToml(e.to_string()))
        }
        ConfigFormat::Yaml => {
            // An empty YAML document is a valid, all-defaults config.
            if source.trim().is_empty() {
                return Ok(SiteConfig::default());
            }
            serde_yaml::from_str(source).map_err(|e| SiteError::InvalidYaml(e.to_string()))
        }
    }
}

/// Load a site configuration file.
pub fn load_site(path: &Path) -> Result<SiteConfig, SiteError> {
    let format = ConfigFormat::from_path(path)?;

    let source = fs::read_to_string(path).map_err(|e| SiteError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let config = parse_site(&source, format)?;
    tracing::debug!("Loaded site config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use vitrine_core::Platform;

    use crate::services::Price;

    const TOML_SITE: &str = r##"
[site]
title = "Shabito"

[contact]
title = "Work with me"
email = "hello@shabito.net"
x_handle = "byshabito"

[support]
chaturbate_username = "shabito"
lightning = "lnurl1dp68gurn8ghj7"

[[services.items]]
title = "Custom App"
price_tokens = 1000
price_usd = "50+"

[[apps.items]]
name = "ShowMoji"
description = "Clear status emojis."
tag = "Free"
href = "https://chaturbate.com/v2apps/apps/57d31a05-showmoji"

[[bios.items]]
name = "Violeta Rain"
theme_color = "#fe4e27"
href = "https://chaturbate.com/violetarainn/"

[[footer.links]]
platform = "github"
handle = "byshabito"

[[footer.links]]
platform = "buymeacoffee"
url = "https://buymeacoffee.com/shabito"
"##;

    #[test]
    fn parses_toml() {
        let config = parse_site(TOML_SITE, ConfigFormat::Toml).unwrap();

        assert_eq!(config.site.title, "Shabito");
        assert_eq!(config.contact.title, "Work with me");
        assert_eq!(config.contact.x_handle.as_deref(), Some("byshabito"));
        assert_eq!(config.support.lightning.as_deref(), Some("lnurl1dp68gurn8ghj7"));
        assert_eq!(config.services.items[0].price_tokens, Price::Amount(1000));
        assert_eq!(config.services.items[0].price_usd, Price::Text("50+".to_string()));
        assert_eq!(config.apps.items.len(), 1);
        assert_eq!(config.bios.items[0].theme_color.as_deref(), Some("#fe4e27"));
        assert_eq!(config.footer.links[0].platform, Some(Platform::GitHub));
        assert_eq!(config.footer.links[1].platform, Some(Platform::BuyMeACoffee));
    }

    #[test]
    fn keeps_defaults_for_missing_sections() {
        let config = parse_site(TOML_SITE, ConfigFormat::Toml).unwrap();

        assert_eq!(config.support.title, "Support my work");
        assert_eq!(config.services.cta_label, "Contact me");
        assert_eq!(config.site.lang, "en");
    }

    #[test]
    fn parses_yaml() {
        let source = r#"
site:
  title: Shabito
contact:
  instagram_handle: "@by_shabito"
apps:
  items:
    - name: FollowMeter
      description: Live follower tracker and notifier.
      href: https://chaturbate.com/v2apps/apps/4fc060e7-followmeter
"#;

        let config = parse_site(source, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.contact.instagram_handle.as_deref(), Some("@by_shabito"));
        assert_eq!(config.apps.items[0].name, "FollowMeter");
    }

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config = parse_site("", ConfigFormat::Yaml).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn errors_on_invalid_toml() {
        let result = parse_site("[site\ntitle = 1", ConfigFormat::Toml);
        assert!(matches!(result, Err(SiteError::InvalidToml(_))));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = parse_site("site: [unclosed", ConfigFormat::Yaml);
        assert!(matches!(result, Err(SiteError::InvalidYaml(_))));
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("site.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("site.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert!(matches!(
            ConfigFormat::from_path(&PathBuf::from("site.json")),
            Err(SiteError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, TOML_SITE).unwrap();

        let config = load_site(&path).unwrap();
        assert_eq!(config.site.title, "Shabito");

        let missing = load_site(&temp.path().join("missing.toml"));
        assert!(matches!(missing, Err(SiteError::Read { .. })));
    }
}
