//! Initialize a landing page project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let root = super::config_root(config_path);
    fs::create_dir_all(&root).context("Failed to create project directory")?;

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public_dir = root.join("public");
    if !public_dir.exists() {
        fs::create_dir_all(public_dir.join("assets"))
            .context("Failed to create public directory")?;
        tracing::info!("Created public/");
    }

    let keep_path = public_dir.join(".gitkeep");
    if !keep_path.exists() {
        fs::write(&keep_path, "").context("Failed to write public/.gitkeep")?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'vitrine dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# vitrine site configuration
#
# Every section is optional. Leave an identity out and its link is hidden;
# `vitrine links` lists what is still unconfigured.

[site]
title = "My Site"
description = "Apps, bios and tools for Chaturbate."
# Public URL; an absolute one (https://...) also enables the sitemap
base_url = "/"
# brand = "My Name"
# avatar = "/assets/avatar.jpg"

[hero]
title = "Apps, Bios and Tools for Chaturbate"
lede = "I create apps, biographies and tools that help you stand out and grow on Chaturbate."
primary_cta = { label = "Get in touch", href = "#contact" }
secondary_cta = { label = "See my work", href = "#apps" }

[services]
title = "Services"
contact_href = "#contact"
cta_label = "Contact me"

[[services.items]]
title = "Custom Chaturbate App"
description = "Tailored features for your stream and needs."
includes = ["Tip menu, goals, games, etc", "Utilities tailored to you", "Add-ons: OBS overlays"]
price_tokens = 1000
price_usd = 50
icon = "code"

[[services.items]]
title = "Custom Bio Design"
description = "Unique design that conveys your style."
includes = ["Unique, personalized design", "Clean, mobile-friendly design", "Pinned links to socials"]
price_tokens = 750
price_usd = 35
icon = "scroll"

[apps]
title = "Chaturbate Apps"

# [[apps.items]]
# name = "ShowMoji"
# logo_url = "/assets/apps/showmoji.svg"
# description = "Clear status emojis and smart hashtag rotation."
# tag = "Free"
# href = "https://chaturbate.com/v2apps/apps/..."

[bios]
title = "Chaturbate Bios"

# [[bios.items]]
# name = "Model Name"
# preview_url = "/assets/bios/model.webp"
# tag = "Custom"
# theme_color = "#fe4e27"
# href = "https://chaturbate.com/model/"

[tools]
enabled = false

[contact]
title = "Contact"
# email = "hello@example.com"
# x_handle = "yourhandle"
# instagram_handle = "yourhandle"
# threads_handle = "yourhandle"

[support]
title = "Support my work"
# chaturbate_username = "yourname"
# buy_me_a_coffee_username = "yourname"
# lightning = "you@walletofsatoshi.com"
# onchain_address = "bc1..."

[build]
output = "dist"
public_dir = "public"
minify = true
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vitrine_site::load_site;

    #[tokio::test]
    async fn writes_loadable_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");

        run(&config, false).await.unwrap();

        let site = load_site(&config).unwrap();
        assert_eq!(site.services.items.len(), 2);
        assert!(!site.tools.enabled);
        assert!(temp.path().join("public").is_dir());
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site]\ntitle = \"Mine\"\n").unwrap();

        run(&config, false).await.unwrap();
        assert!(fs::read_to_string(&config).unwrap().contains("Mine"));

        run(&config, true).await.unwrap();
        assert!(fs::read_to_string(&config).unwrap().contains("vitrine site configuration"));
    }
}
