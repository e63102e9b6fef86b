//! Static site generator for vitrine landing pages.
//!
//! Renders a site configuration into a single self-contained landing page
//! with its assets, a link manifest and a sitemap.

pub mod assets;
pub mod builder;
pub mod icons;
pub mod templates;
pub mod view;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use icons::icon_svg;
pub use templates::{Context, TemplateEngine};
pub use view::{link_report, LinkEntry, PageView};
