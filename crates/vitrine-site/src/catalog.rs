//! Gallery entries: apps, bios and tools.

use serde::Deserialize;

/// Common behaviour of gallery entries.
pub trait CatalogItem {
    /// Entry name.
    fn name(&self) -> &str;

    /// Stable key for the entry, falling back through id, link and name.
    fn display_key(&self) -> &str;

    /// Letter shown when the entry has no image.
    fn initial(&self) -> char;

    /// Trimmed tag, if any.
    fn tag(&self) -> Option<&str>;
}

/// First character of the trimmed name, uppercased, or `fallback`.
fn initial_of(name: &str, fallback: char) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(fallback)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// An app in the apps gallery.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppItem {
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    /// Logo image; an initial avatar is shown without one
    #[serde(default)]
    pub logo_url: Option<String>,

    pub description: String,

    /// Single tag chip, e.g. "Free"
    #[serde(default)]
    pub tag: Option<String>,

    /// Link to the app's detail or install page
    pub href: String,
}

impl CatalogItem for AppItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_key(&self) -> &str {
        non_empty(self.id.as_deref())
            .or_else(|| non_empty(Some(self.href.as_str())))
            .unwrap_or(&self.name)
    }

    fn initial(&self) -> char {
        initial_of(&self.name, 'A')
    }

    fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }
}

/// A custom bio in the bios gallery.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BioItem {
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    /// Screenshot of the bio
    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(default)]
    pub tag: Option<String>,

    /// Accent color (any CSS color)
    #[serde(default)]
    pub theme_color: Option<String>,

    /// Link to the model's room
    pub href: String,
}

impl BioItem {
    /// Fill color for the fallback preview.
    pub const DEFAULT_ACCENT: &'static str = "#e5e7eb";

    /// Trimmed accent color, if configured.
    pub fn accent(&self) -> Option<&str> {
        non_empty(self.theme_color.as_deref())
    }
}

impl CatalogItem for BioItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_key(&self) -> &str {
        non_empty(self.id.as_deref())
            .or_else(|| non_empty(Some(self.href.as_str())))
            .unwrap_or(&self.name)
    }

    fn initial(&self) -> char {
        initial_of(&self.name, 'B')
    }

    fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }
}

/// A tool in the tools gallery.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ToolItem {
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub logo_url: Option<String>,

    pub description: String,

    /// Website or store page
    #[serde(default)]
    pub href: Option<String>,

    /// Source repository
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl ToolItem {
    /// Preferred link: the site, then the repository.
    pub fn primary_link(&self) -> Option<&str> {
        non_empty(self.href.as_deref()).or_else(|| non_empty(self.repo_url.as_deref()))
    }

    /// Repository link, if any.
    pub fn repo_link(&self) -> Option<&str> {
        non_empty(self.repo_url.as_deref())
    }
}

impl CatalogItem for ToolItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_key(&self) -> &str {
        non_empty(self.id.as_deref())
            .or_else(|| self.primary_link())
            .unwrap_or(&self.name)
    }

    fn initial(&self) -> char {
        initial_of(&self.name, 'T')
    }

    fn tag(&self) -> Option<&str> {
        None
    }
}
