//! Link resolution and toggle state for vitrine landing pages.
//!
//! Turns optional identity configuration (handles, addresses, override URLs)
//! into outbound links, and models the small per-section UI state the page
//! runtime mirrors in the browser.

pub mod copy;
pub mod handle;
pub mod links;
pub mod theme;
pub mod toggle;

pub use copy::{
    Clipboard, ClipboardError, CopyController, CopyFeedback, CopyTicket, MemoryClipboard,
    NoClipboard, COPY_FEEDBACK_DELAY,
};
pub use handle::{handle_label, normalize_handle};
pub use links::{
    bitcoin_uri, inquiry_mailto, is_lightning_invoice, lightning_uri, mailto, resolve_email,
    resolve_social, social_url, BitcoinTargets, Platform, ResolvedLink,
};
pub use theme::{Theme, THEME_STORAGE_KEY};
pub use toggle::{PaymentMode, PriceMode, PriceModes};
