//! Outbound link resolution.
//!
//! Every builder here is total: missing input yields `None`, which callers
//! treat as "hide this affordance", never as an error or an empty link.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::handle::{handle_label, normalize_handle};
use crate::toggle::PaymentMode;

/// Characters left unescaped in a URI component (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const LIGHTNING_SCHEME: &str = "lightning:";
const BITCOIN_SCHEME: &str = "bitcoin:";

/// Platforms with a fixed profile URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X,
    Instagram,
    Threads,
    Chaturbate,
    #[serde(rename = "buymeacoffee")]
    BuyMeACoffee,
    #[serde(rename = "github")]
    GitHub,
    Nostr,
}

impl Platform {
    /// Human-readable platform name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::Instagram => "Instagram",
            Platform::Threads => "Threads",
            Platform::Chaturbate => "Chaturbate",
            Platform::BuyMeACoffee => "Buy Me a Coffee",
            Platform::GitHub => "GitHub",
            Platform::Nostr => "Nostr",
        }
    }

    /// Identifier used for icons and CSS hooks.
    pub fn slug(self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::Instagram => "instagram",
            Platform::Threads => "threads",
            Platform::Chaturbate => "chaturbate",
            Platform::BuyMeACoffee => "buymeacoffee",
            Platform::GitHub => "github",
            Platform::Nostr => "nostr",
        }
    }

    /// Splice an already-encoded handle into the platform's profile URL.
    fn profile_url(self, encoded: &str) -> String {
        match self {
            Platform::X => format!("https://x.com/{}", encoded),
            Platform::Instagram => format!("https://instagram.com/{}", encoded),
            Platform::Threads => format!("https://www.threads.com/@{}", encoded),
            Platform::Chaturbate => format!("https://chaturbate.com/{}/", encoded),
            Platform::BuyMeACoffee => format!("https://buymeacoffee.com/{}", encoded),
            Platform::GitHub => format!("https://github.com/{}", encoded),
            Platform::Nostr => format!("https://nostr.com/{}", encoded),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A link ready to render: what to show and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    /// Visible text
    pub label: String,
    /// Target URI
    pub href: String,
    /// Accessible name for the anchor
    pub aria_label: String,
    /// Open in a new tab with `rel="noreferrer noopener"`
    pub external: bool,
}

/// Treat empty and whitespace-only configuration values as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build a profile URL for `platform`.
///
/// An override URL is returned verbatim. Otherwise the handle is normalized,
/// percent-encoded and spliced into the platform template.
pub fn social_url(
    platform: Platform,
    handle: Option<&str>,
    override_url: Option<&str>,
) -> Option<String> {
    if let Some(url) = present(override_url) {
        return Some(url.to_string());
    }

    let handle = present(normalize_handle(handle))?;
    Some(platform.profile_url(&encode_component(handle)))
}

/// Build a `mailto:` link, preferring an override URL.
pub fn mailto(email: Option<&str>, override_url: Option<&str>) -> Option<String> {
    if let Some(url) = present(override_url) {
        return Some(url.to_string());
    }

    present(email).map(|email| format!("mailto:{}", email))
}

/// Build a `mailto:` link with a subject line asking about `name`.
pub fn inquiry_mailto(email: &str, name: &str) -> String {
    let subject = format!("Question about \"{}\"", name);
    format!("mailto:{}?subject={}", email, encode_component(&subject))
}

/// Prefix `raw` with `scheme` unless it already carries it.
fn ensure_scheme(raw: Option<&str>, scheme: &str) -> Option<String> {
    let value = present(raw)?.trim();

    let has_scheme = value
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme));

    if has_scheme {
        Some(value.to_string())
    } else {
        Some(format!("{}{}", scheme, value))
    }
}

/// Build a `lightning:` URI from an address, LNURL or invoice.
///
/// The payload is not validated; the wallet reports malformed input.
pub fn lightning_uri(raw: Option<&str>) -> Option<String> {
    ensure_scheme(raw, LIGHTNING_SCHEME)
}

/// Build a `bitcoin:` URI from an on-chain address.
pub fn bitcoin_uri(raw: Option<&str>) -> Option<String> {
    ensure_scheme(raw, BITCOIN_SCHEME)
}

/// Whether a lightning value is a BOLT11 invoice, which may expire.
pub fn is_lightning_invoice(raw: &str) -> bool {
    let value = raw.trim();
    let value = match value.get(..LIGHTNING_SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(LIGHTNING_SCHEME) => {
            &value[LIGHTNING_SCHEME.len()..]
        }
        _ => value,
    };

    value
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("lnbc"))
}

/// Resolve a handle-based profile link.
///
/// The label is the `@handle`; with only an override URL it falls back to
/// the platform name.
pub fn resolve_social(
    platform: Platform,
    handle: Option<&str>,
    override_url: Option<&str>,
) -> Option<ResolvedLink> {
    let href = social_url(platform, handle, override_url)?;

    let (label, aria_label) = match handle_label(handle) {
        Some(label) => {
            let aria = format!(
                "Open {} profile {} in new tab",
                platform.display_name(),
                label
            );
            (label, aria)
        }
        None => (
            platform.display_name().to_string(),
            format!("Open {} profile in new tab", platform.display_name()),
        ),
    };

    Some(ResolvedLink {
        label,
        href,
        aria_label,
        external: true,
    })
}

/// Resolve an email link labelled with the literal address.
pub fn resolve_email(email: Option<&str>, override_url: Option<&str>) -> Option<ResolvedLink> {
    let href = mailto(email, override_url)?;
    let label = present(email).unwrap_or("Email").to_string();

    Some(ResolvedLink {
        aria_label: format!("Email {}", label),
        label,
        href,
        external: false,
    })
}

/// The two Bitcoin payment targets of a support section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitcoinTargets {
    lightning: Option<String>,
    onchain: Option<String>,
}

impl BitcoinTargets {
    /// Capture the configured raw values, dropping blank ones.
    pub fn new(lightning: Option<&str>, onchain: Option<&str>) -> Self {
        Self {
            lightning: present(lightning).map(|v| v.trim().to_string()),
            onchain: present(onchain).map(|v| v.trim().to_string()),
        }
    }

    /// Raw value shown (and copied) for `mode`.
    pub fn active_value(&self, mode: PaymentMode) -> Option<&str> {
        match mode {
            PaymentMode::Lightning => self.lightning.as_deref(),
            PaymentMode::Onchain => self.onchain.as_deref(),
        }
    }

    /// Wallet URI for `mode`.
    pub fn active_uri(&self, mode: PaymentMode) -> Option<String> {
        match mode {
            PaymentMode::Lightning => lightning_uri(self.lightning.as_deref()),
            PaymentMode::Onchain => bitcoin_uri(self.onchain.as_deref()),
        }
    }

    /// Whether any payment target is configured.
    pub fn is_empty(&self) -> bool {
        self.lightning.is_none() && self.onchain.is_none()
    }
}
