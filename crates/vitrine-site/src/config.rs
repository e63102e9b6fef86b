//! Site configuration model.
//!
//! Every section is optional; missing fields take the defaults below.

use serde::Deserialize;
use vitrine_core::Platform;

use crate::catalog::{AppItem, BioItem, ToolItem};
use crate::services::Service;

/// Complete configuration for one landing page.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub hero: Hero,
    pub nav: Vec<NavLink>,
    pub services: ServicesConfig,
    pub apps: AppsGallery,
    pub bios: BiosGallery,
    pub tools: ToolsGallery,
    pub contact: ContactConfig,
    pub support: SupportConfig,
    pub footer: FooterConfig,
    pub build: BuildSettings,
}

impl SiteConfig {
    /// Navigation links, defaulting to the gallery anchors.
    pub fn nav_links(&self) -> Vec<NavLink> {
        if !self.nav.is_empty() {
            return self.nav.clone();
        }

        let mut links = vec![
            NavLink::new("Services", "#services"),
            NavLink::new("Apps", "#apps"),
            NavLink::new("Bios", "#bios"),
        ];
        if self.tools.enabled {
            links.push(NavLink::new("Tools", "#tools"));
        }
        links
    }
}

/// Page-wide metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteMeta {
    /// Document title and default brand name
    pub title: String,

    /// Meta description
    pub description: Option<String>,

    /// `lang` attribute of the document
    pub lang: String,

    /// Public base URL, used for asset paths and the sitemap
    pub base_url: String,

    /// Name shown next to the avatar
    pub brand: Option<String>,

    /// Avatar image path
    pub avatar: Option<String>,
}

impl SiteMeta {
    pub fn brand_name(&self) -> &str {
        self.brand
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: None,
            lang: "en".to_string(),
            base_url: "/".to_string(),
            brand: None,
            avatar: None,
        }
    }
}

/// A labelled link to an anchor or URL.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// A call-to-action button.
pub type Cta = NavLink;

/// Headline block at the top of the page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub lede: Option<String>,
    pub primary_cta: Option<Cta>,
    pub secondary_cta: Option<Cta>,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Apps, Bios and Tools for Chaturbate".to_string(),
            lede: Some(
                "I create apps, biographies and tools that help you stand out and grow on Chaturbate."
                    .to_string(),
            ),
            primary_cta: Some(Cta::new("Get in touch", "#contact")),
            secondary_cta: Some(Cta::new("See my work", "#apps")),
        }
    }
}

/// Services section with per-card price toggles.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    pub title: String,
    pub subtitle: Option<String>,

    /// Where each card's call-to-action points
    pub contact_href: String,

    pub cta_label: String,

    pub items: Vec<Service>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            title: "Services".to_string(),
            subtitle: Some("I offer two custom services to make you stand out.".to_string()),
            contact_href: "#contact".to_string(),
            cta_label: "Contact me".to_string(),
            items: vec![Service::default_app(), Service::default_bio()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppsGallery {
    pub title: String,
    pub subtitle: Option<String>,
    pub items: Vec<AppItem>,
}

impl Default for AppsGallery {
    fn default() -> Self {
        Self {
            title: "Chaturbate Apps".to_string(),
            subtitle: None,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiosGallery {
    pub title: String,
    pub subtitle: Option<String>,
    pub items: Vec<BioItem>,
}

impl Default for BiosGallery {
    fn default() -> Self {
        Self {
            title: "Chaturbate Bios".to_string(),
            subtitle: None,
            items: Vec::new(),
        }
    }
}

/// Tools gallery. Hidden unless `enabled` is set.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolsGallery {
    pub enabled: bool,
    pub title: String,
    pub subtitle: Option<String>,

    /// Inquiry address for tools without a site or repository
    pub contact_email: Option<String>,

    pub items: Vec<ToolItem>,
}

impl Default for ToolsGallery {
    fn default() -> Self {
        Self {
            enabled: false,
            title: "Other Tools".to_string(),
            subtitle: None,
            contact_email: None,
            items: Vec::new(),
        }
    }
}

/// Contact identities. Each `*_url` overrides the matching handle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub email: Option<String>,
    pub email_url: Option<String>,
    pub x_handle: Option<String>,
    pub x_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub instagram_url: Option<String>,
    pub threads_handle: Option<String>,
    pub threads_url: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: "Contact".to_string(),
            subtitle: Some("Pick whatever works for you: email or DMs.".to_string()),
            email: None,
            email_url: None,
            x_handle: None,
            x_url: None,
            instagram_handle: None,
            instagram_url: None,
            threads_handle: None,
            threads_url: None,
        }
    }
}

/// Support and donation options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupportConfig {
    pub title: String,
    pub subtitle: Option<String>,

    /// Builds `https://chaturbate.com/<username>/`
    pub chaturbate_username: Option<String>,
    pub chaturbate_url: Option<String>,

    /// Builds `https://buymeacoffee.com/<username>`
    pub buy_me_a_coffee_username: Option<String>,
    pub buy_me_a_coffee_url: Option<String>,

    /// Lightning address, LNURL or BOLT11 invoice
    pub lightning: Option<String>,

    /// On-chain Bitcoin address
    pub onchain_address: Option<String>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            title: "Support my work".to_string(),
            subtitle: Some(
                "Your support means a lot to me and helps me continue doing it.\\\n\
                 You can support me via Chaturbate tokens, Buy Me a Coffee, or Bitcoin."
                    .to_string(),
            ),
            chaturbate_username: None,
            chaturbate_url: None,
            buy_me_a_coffee_username: None,
            buy_me_a_coffee_url: None,
            lightning: None,
            onchain_address: None,
        }
    }
}

/// Footer with copyright line and icon links.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FooterConfig {
    /// Copyright holder, defaults to the brand name
    pub owner: Option<String>,
    pub links: Vec<FooterLink>,
}

/// One footer icon link: an email address or a platform profile.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FooterLink {
    pub platform: Option<Platform>,
    pub email: Option<String>,
    pub handle: Option<String>,
    /// Full URL, overriding `handle`/`email`
    pub url: Option<String>,
}

/// Build output settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    pub output: String,

    /// Static files copied verbatim into the output
    pub public_dir: String,

    pub minify: bool,

    /// Extra stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: "dist".to_string(),
            public_dir: "public".to_string(),
            minify: true,
            styles: Vec::new(),
        }
    }
}
