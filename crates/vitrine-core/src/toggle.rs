//! Per-section toggle state.
//!
//! Each section instance owns its own store; nothing here is global or
//! persisted across reloads.

use std::collections::HashMap;

use serde::Serialize;

/// Which price a service card shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// Price in platform tokens
    #[default]
    Tokens,
    /// Price in US dollars
    Usd,
}

impl PriceMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            PriceMode::Tokens => PriceMode::Usd,
            PriceMode::Usd => PriceMode::Tokens,
        }
    }

    /// Attribute value used by the page runtime.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceMode::Tokens => "tokens",
            PriceMode::Usd => "usd",
        }
    }
}

/// Price modes keyed by card index.
///
/// Cards that were never toggled report [`PriceMode::Tokens`].
#[derive(Debug, Clone, Default)]
pub struct PriceModes {
    modes: HashMap<usize, PriceMode>,
}

impl PriceModes {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode of card `index`.
    pub fn mode_for(&self, index: usize) -> PriceMode {
        self.modes.get(&index).copied().unwrap_or_default()
    }

    /// Flip card `index` and return its new mode.
    pub fn toggle(&mut self, index: usize) -> PriceMode {
        let next = self.mode_for(index).toggled();
        self.modes.insert(index, next);
        next
    }
}

/// Which Bitcoin payment method the support section shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    #[default]
    Lightning,
    Onchain,
}

impl PaymentMode {
    /// Attribute value used by the page runtime.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMode::Lightning => "lightning",
            PaymentMode::Onchain => "onchain",
        }
    }

    /// Copy-feedback key for the value shown in this mode.
    pub fn copy_key(self) -> &'static str {
        match self {
            PaymentMode::Lightning => "lightning-copy",
            PaymentMode::Onchain => "onchain-copy",
        }
    }

    /// Caption above the displayed value.
    pub fn caption(self) -> &'static str {
        match self {
            PaymentMode::Lightning => "Lightning address / invoice",
            PaymentMode::Onchain => "On\u{2011}chain address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_default_to_tokens() {
        let modes = PriceModes::new();

        assert_eq!(modes.mode_for(0), PriceMode::Tokens);
        assert_eq!(modes.mode_for(7), PriceMode::Tokens);
    }

    #[test]
    fn toggling_one_card_leaves_others_alone() {
        let mut modes = PriceModes::new();

        assert_eq!(modes.toggle(0), PriceMode::Usd);

        assert_eq!(modes.mode_for(0), PriceMode::Usd);
        assert_eq!(modes.mode_for(1), PriceMode::Tokens);
    }

    #[test]
    fn toggling_twice_restores_tokens() {
        let mut modes = PriceModes::new();

        modes.toggle(1);
        modes.toggle(1);

        assert_eq!(modes.mode_for(1), PriceMode::Tokens);
    }

    #[test]
    fn separate_stores_are_independent() {
        let mut services = PriceModes::new();
        let other = PriceModes::new();

        services.toggle(0);

        assert_eq!(other.mode_for(0), PriceMode::Tokens);
    }

    #[test]
    fn payment_mode_defaults_to_lightning() {
        assert_eq!(PaymentMode::default(), PaymentMode::Lightning);
        assert_eq!(PaymentMode::Lightning.copy_key(), "lightning-copy");
        assert_eq!(PaymentMode::Onchain.copy_key(), "onchain-copy");
    }
}
