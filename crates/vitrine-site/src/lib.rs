//! Site configuration for vitrine landing pages.
//!
//! Describes every section of the page (hero, services, galleries, contact,
//! support, footer) and loads it from TOML or YAML.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod markdown;
pub mod services;

pub use catalog::{AppItem, BioItem, CatalogItem, ToolItem};
pub use config::{
    AppsGallery, BiosGallery, BuildSettings, ContactConfig, Cta, FooterConfig, FooterLink, Hero,
    NavLink, ServicesConfig, SiteConfig, SiteMeta, SupportConfig, ToolsGallery,
};
pub use loader::{load_site, parse_site, ConfigFormat, SiteError};
pub use markdown::render_inline;
pub use services::{Price, Service};
