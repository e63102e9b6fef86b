//! Service offerings and their prices.

use std::fmt;

use serde::Deserialize;

/// A starting price: a number to format, or text shown as-is.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Amount(u64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => f.write_str(&group_thousands(*n)),
            Price::Decimal(n) if n.is_finite() && *n >= 0.0 => {
                f.write_str(&group_thousands(n.round() as u64))
            }
            Price::Decimal(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// Format `n` with comma thousands separators and no fraction digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// A custom service card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Bullet points of what is included
    #[serde(default)]
    pub includes: Vec<String>,

    /// Starting price in platform tokens
    pub price_tokens: Price,

    /// Starting price in USD
    pub price_usd: Price,

    /// Icon name: "code" or "scroll"
    #[serde(default)]
    pub icon: Option<String>,
}

impl Service {
    /// The default custom app offering.
    pub fn default_app() -> Self {
        Self {
            title: "Custom Chaturbate App".to_string(),
            description: Some("Tailored features for your stream and needs.".to_string()),
            includes: vec![
                "Tip menu, goals, games, etc".to_string(),
                "Utilities tailored to you".to_string(),
                "Add-ons: OBS overlays".to_string(),
            ],
            price_tokens: Price::Amount(1000),
            price_usd: Price::Amount(50),
            icon: Some("code".to_string()),
        }
    }

    /// The default custom bio offering.
    pub fn default_bio() -> Self {
        Self {
            title: "Custom Bio Design".to_string(),
            description: Some("Unique design that conveys your style.".to_string()),
            includes: vec![
                "Unique, personalized design".to_string(),
                "Clean, mobile-friendly and responsive design".to_string(),
                "Pinned links to socials and other sites".to_string(),
            ],
            price_tokens: Price::Amount(750),
            price_usd: Price::Amount(35),
            icon: Some("scroll".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(Price::Amount(0).to_string(), "0");
        assert_eq!(Price::Amount(750).to_string(), "750");
        assert_eq!(Price::Amount(1000).to_string(), "1,000");
        assert_eq!(Price::Amount(1234567).to_string(), "1,234,567");
    }

    #[test]
    fn rounds_decimals() {
        assert_eq!(Price::Decimal(49.6).to_string(), "50");
        assert_eq!(Price::Decimal(1999.4).to_string(), "1,999");
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(Price::Text("from 900".to_string()).to_string(), "from 900");
    }
}
