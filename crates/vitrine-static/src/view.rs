//! Page view model.
//!
//! Maps a [`SiteConfig`] to the values the templates render. Every outbound
//! link goes through the resolver in `vitrine-core`; a link that resolves to
//! nothing is left as `None` so the templates show a "not configured" notice
//! instead of a dead anchor.

use serde::Serialize;

use vitrine_core::{
    handle_label, inquiry_mailto, is_lightning_invoice, resolve_email, resolve_social, social_url,
    BitcoinTargets, PaymentMode, Platform, PriceMode, PriceModes, ResolvedLink,
    COPY_FEEDBACK_DELAY, THEME_STORAGE_KEY,
};
use vitrine_site::{
    render_inline, AppItem, BioItem, CatalogItem, ContactConfig, FooterLink, NavLink, Service,
    SiteConfig, SupportConfig, ToolItem,
};

/// Everything the landing template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub base_url: String,
    pub brand: BrandView,
    pub nav: Vec<LinkView>,
    pub hero: HeroView,
    pub services: ServicesView,
    pub apps: GalleryView<AppCard>,
    pub bios: GalleryView<BioCard>,
    pub tools: Option<GalleryView<ToolCard>>,
    pub contact: ContactView,
    pub support: SupportView,
    pub footer: FooterView,
    pub runtime: RuntimeView,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandView {
    pub name: String,
    pub avatar: Option<String>,
    pub initial: char,
}

/// A plain labelled link.
#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

impl From<&NavLink> for LinkView {
    fn from(link: &NavLink) -> Self {
        Self {
            label: link.label.clone(),
            href: link.href.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub title: String,
    pub lede_html: Option<String>,
    pub primary_cta: Option<LinkView>,
    pub secondary_cta: Option<LinkView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesView {
    pub title: String,
    pub subtitle_html: Option<String>,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub index: usize,
    pub title: String,
    pub icon: String,
    pub description_html: Option<String>,
    pub includes: Vec<String>,
    pub price_tokens: String,
    pub price_usd: String,
    /// Mode shown on first render
    pub price_mode: PriceMode,
    pub cta: LinkView,
    pub cta_aria_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryView<T> {
    pub title: String,
    pub subtitle_html: Option<String>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppCard {
    pub key: String,
    pub name: String,
    pub href: String,
    pub aria_label: String,
    pub logo_url: Option<String>,
    pub initial: char,
    pub tag: Option<String>,
    pub description_html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BioCard {
    pub key: String,
    pub name: String,
    pub href: String,
    pub aria_label: String,
    pub preview_url: Option<String>,
    pub initial: char,
    pub tag: Option<String>,
    /// Border accent, only when configured
    pub accent: Option<String>,
    /// Fill of the fallback preview
    pub fallback_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCard {
    pub key: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub initial: char,
    pub description_html: String,
    /// Site, then repository, then an inquiry email
    pub title_href: Option<String>,
    /// Whether `title_href` leaves the page
    pub external: bool,
    pub repo_url: Option<String>,
}

/// A resolved link with the icon to show next to it.
#[derive(Debug, Clone, Serialize)]
pub struct IconLink {
    pub icon: &'static str,
    #[serde(flatten)]
    pub link: ResolvedLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub title: String,
    pub subtitle_html: Option<String>,
    pub links: Vec<IconLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportView {
    pub title: String,
    pub subtitle_html: Option<String>,
    pub chaturbate_href: Option<String>,
    pub buy_me_a_coffee_href: Option<String>,
    /// Mode shown on first render
    pub payment_mode: PaymentMode,
    pub payments: Vec<PaymentPanel>,
}

/// One side of the Bitcoin block.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentPanel {
    pub mode: PaymentMode,
    pub caption: &'static str,
    pub copy_key: &'static str,
    /// Raw value to show and copy
    pub value: Option<String>,
    /// Wallet URI
    pub uri: Option<String>,
    /// Show the "Invoice may expire" hint
    pub expiring: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub owner: String,
    pub links: Vec<IconLink>,
}

/// Values the page runtime script reads.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeView {
    pub theme_key: &'static str,
    pub copy_delay_ms: u64,
}

/// One outbound link and where it came from, resolved or hidden.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkEntry {
    pub section: &'static str,
    pub name: String,
    pub href: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn inline(text: Option<&str>) -> Option<String> {
    non_empty(text).map(render_inline)
}

/// Base URL with exactly one trailing slash.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}

impl PageView {
    /// Build the view for `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let brand_name = config.site.brand_name().to_string();
        let initial = brand_name
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('S');

        let owner = config
            .footer
            .owner
            .clone()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| brand_name.clone());

        Self {
            lang: config.site.lang.clone(),
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            base_url: normalize_base_url(&config.site.base_url),
            brand: BrandView {
                name: brand_name,
                avatar: non_empty(config.site.avatar.as_deref()).map(String::from),
                initial,
            },
            nav: config.nav_links().iter().map(LinkView::from).collect(),
            hero: HeroView {
                title: config.hero.title.clone(),
                lede_html: inline(config.hero.lede.as_deref()),
                primary_cta: config.hero.primary_cta.as_ref().map(LinkView::from),
                secondary_cta: config.hero.secondary_cta.as_ref().map(LinkView::from),
            },
            services: services_view(config),
            apps: GalleryView {
                title: config.apps.title.clone(),
                subtitle_html: inline(config.apps.subtitle.as_deref()),
                items: config.apps.items.iter().map(app_card).collect(),
            },
            bios: GalleryView {
                title: config.bios.title.clone(),
                subtitle_html: inline(config.bios.subtitle.as_deref()),
                items: config.bios.items.iter().map(bio_card).collect(),
            },
            tools: config.tools.enabled.then(|| {
                let contact = non_empty(config.tools.contact_email.as_deref());
                GalleryView {
                    title: config.tools.title.clone(),
                    subtitle_html: inline(config.tools.subtitle.as_deref()),
                    items: config
                        .tools
                        .items
                        .iter()
                        .map(|tool| tool_card(tool, contact))
                        .collect(),
                }
            }),
            contact: ContactView {
                title: config.contact.title.clone(),
                subtitle_html: inline(config.contact.subtitle.as_deref()),
                links: contact_links(&config.contact),
            },
            support: support_view(&config.support),
            footer: FooterView {
                owner,
                links: footer_links(config),
            },
            runtime: RuntimeView {
                theme_key: THEME_STORAGE_KEY,
                copy_delay_ms: COPY_FEEDBACK_DELAY.as_millis() as u64,
            },
        }
    }
}

fn services_view(config: &SiteConfig) -> ServicesView {
    let modes = PriceModes::new();
    let services = &config.services;

    let cards = services
        .items
        .iter()
        .enumerate()
        .map(|(index, service)| service_card(index, service, &modes, config))
        .collect();

    ServicesView {
        title: services.title.clone(),
        subtitle_html: inline(services.subtitle.as_deref()),
        cards,
    }
}

fn service_card(
    index: usize,
    service: &Service,
    modes: &PriceModes,
    config: &SiteConfig,
) -> ServiceCard {
    ServiceCard {
        index,
        title: service.title.clone(),
        icon: service.icon.clone().unwrap_or_else(|| "code".to_string()),
        description_html: inline(service.description.as_deref()),
        includes: service.includes.clone(),
        price_tokens: service.price_tokens.to_string(),
        price_usd: service.price_usd.to_string(),
        price_mode: modes.mode_for(index),
        cta: LinkView {
            label: config.services.cta_label.clone(),
            href: config.services.contact_href.clone(),
        },
        cta_aria_label: format!("{} \u{2013} {}", config.services.title, service.title),
    }
}

fn app_card(app: &AppItem) -> AppCard {
    AppCard {
        key: app.display_key().to_string(),
        name: app.name.clone(),
        href: app.href.clone(),
        aria_label: format!("Open {} on Chaturbate", app.name),
        logo_url: non_empty(app.logo_url.as_deref()).map(String::from),
        initial: app.initial(),
        tag: app.tag().map(String::from),
        description_html: render_inline(&app.description),
    }
}

fn bio_card(bio: &BioItem) -> BioCard {
    BioCard {
        key: bio.display_key().to_string(),
        name: bio.name.clone(),
        href: bio.href.clone(),
        aria_label: format!("Open {}'s Chaturbate room", bio.name),
        preview_url: non_empty(bio.preview_url.as_deref()).map(String::from),
        initial: bio.initial(),
        tag: bio.tag().map(String::from),
        accent: bio.accent().map(String::from),
        fallback_color: bio.accent().unwrap_or(BioItem::DEFAULT_ACCENT).to_string(),
    }
}

fn tool_card(tool: &ToolItem, contact_email: Option<&str>) -> ToolCard {
    let primary = tool.primary_link();
    let mail = match (primary, contact_email) {
        (None, Some(email)) => Some(inquiry_mailto(email, &tool.name)),
        _ => None,
    };

    ToolCard {
        key: tool.display_key().to_string(),
        name: tool.name.clone(),
        logo_url: non_empty(tool.logo_url.as_deref()).map(String::from),
        initial: tool.initial(),
        description_html: render_inline(tool.description.trim()),
        external: primary.is_some(),
        title_href: primary.map(String::from).or(mail),
        repo_url: tool.repo_link().map(String::from),
    }
}

/// Email contact link. An override URL alone does not show it.
fn contact_email(contact: &ContactConfig) -> Option<ResolvedLink> {
    non_empty(contact.email.as_deref())?;
    resolve_email(contact.email.as_deref(), contact.email_url.as_deref())
}

/// Handle-based contact link. An override URL alone does not show it.
fn contact_social(
    platform: Platform,
    handle: Option<&str>,
    override_url: Option<&str>,
) -> Option<ResolvedLink> {
    handle_label(handle)?;
    resolve_social(platform, handle, override_url)
}

/// Handle-based contact identities in display order: X, Threads, Instagram.
fn contact_socials(contact: &ContactConfig) -> [(Platform, &Option<String>, &Option<String>); 3] {
    [
        (Platform::X, &contact.x_handle, &contact.x_url),
        (Platform::Threads, &contact.threads_handle, &contact.threads_url),
        (
            Platform::Instagram,
            &contact.instagram_handle,
            &contact.instagram_url,
        ),
    ]
}

/// Contact links in display order: email, X, Threads, Instagram.
fn contact_links(contact: &ContactConfig) -> Vec<IconLink> {
    let email = contact_email(contact).map(|link| IconLink { icon: "mail", link });

    let socials = contact_socials(contact)
        .into_iter()
        .filter_map(|(platform, handle, url)| {
            contact_social(platform, handle.as_deref(), url.as_deref()).map(|link| IconLink {
                icon: platform.slug(),
                link,
            })
        });

    email.into_iter().chain(socials).collect()
}

fn support_view(support: &SupportConfig) -> SupportView {
    let targets = BitcoinTargets::new(
        support.lightning.as_deref(),
        support.onchain_address.as_deref(),
    );

    let payments = [PaymentMode::Lightning, PaymentMode::Onchain]
        .into_iter()
        .map(|mode| {
            let value = targets.active_value(mode).map(String::from);
            PaymentPanel {
                mode,
                caption: mode.caption(),
                copy_key: mode.copy_key(),
                expiring: mode == PaymentMode::Lightning
                    && value.as_deref().is_some_and(is_lightning_invoice),
                uri: targets.active_uri(mode),
                value,
            }
        })
        .collect();

    SupportView {
        title: support.title.clone(),
        subtitle_html: inline(support.subtitle.as_deref()),
        chaturbate_href: social_url(
            Platform::Chaturbate,
            support.chaturbate_username.as_deref(),
            support.chaturbate_url.as_deref(),
        ),
        buy_me_a_coffee_href: social_url(
            Platform::BuyMeACoffee,
            support.buy_me_a_coffee_username.as_deref(),
            support.buy_me_a_coffee_url.as_deref(),
        ),
        payment_mode: PaymentMode::default(),
        payments,
    }
}

fn footer_link(link: &FooterLink) -> Option<IconLink> {
    match link.platform {
        Some(platform) => {
            let mut resolved =
                resolve_social(platform, link.handle.as_deref(), link.url.as_deref())?;
            resolved.label = platform.display_name().to_string();
            Some(IconLink {
                icon: platform.slug(),
                link: resolved,
            })
        }
        None => {
            let mut resolved = resolve_email(link.email.as_deref(), link.url.as_deref())?;
            resolved.label = "Email".to_string();
            Some(IconLink {
                icon: "mail",
                link: resolved,
            })
        }
    }
}

/// Footer links; without explicit links, mirror the contact and support links.
fn footer_links(config: &SiteConfig) -> Vec<IconLink> {
    if !config.footer.links.is_empty() {
        return config.footer.links.iter().filter_map(footer_link).collect();
    }

    let contact = &config.contact;
    let support = &config.support;
    let mut derived = Vec::new();

    if non_empty(contact.email.as_deref()).is_some() {
        derived.push(FooterLink {
            email: contact.email.clone(),
            url: contact.email_url.clone(),
            ..Default::default()
        });
    }
    for (platform, handle, url) in [
        (Platform::X, &contact.x_handle, &contact.x_url),
        (
            Platform::Instagram,
            &contact.instagram_handle,
            &contact.instagram_url,
        ),
        (Platform::Threads, &contact.threads_handle, &contact.threads_url),
    ] {
        if handle_label(handle.as_deref()).is_some() {
            derived.push(FooterLink {
                platform: Some(platform),
                handle: handle.clone(),
                url: url.clone(),
                ..Default::default()
            });
        }
    }
    derived.push(FooterLink {
        platform: Some(Platform::Chaturbate),
        handle: support.chaturbate_username.clone(),
        url: support.chaturbate_url.clone(),
        ..Default::default()
    });

    derived.iter().filter_map(footer_link).collect()
}

/// Every outbound link on the page, including the hidden ones.
pub fn link_report(config: &SiteConfig) -> Vec<LinkEntry> {
    let view = PageView::from_config(config);
    let mut entries = Vec::new();

    let contact = &config.contact;
    entries.push(LinkEntry {
        section: "contact",
        name: "Email".to_string(),
        href: contact_email(contact).map(|l| l.href),
    });
    for (platform, handle, url) in contact_socials(contact) {
        entries.push(LinkEntry {
            section: "contact",
            name: platform.display_name().to_string(),
            href: contact_social(platform, handle.as_deref(), url.as_deref()).map(|l| l.href),
        });
    }

    entries.push(LinkEntry {
        section: "support",
        name: Platform::Chaturbate.display_name().to_string(),
        href: view.support.chaturbate_href.clone(),
    });
    entries.push(LinkEntry {
        section: "support",
        name: Platform::BuyMeACoffee.display_name().to_string(),
        href: view.support.buy_me_a_coffee_href.clone(),
    });
    for panel in &view.support.payments {
        entries.push(LinkEntry {
            section: "support",
            name: match panel.mode {
                PaymentMode::Lightning => "Lightning".to_string(),
                PaymentMode::Onchain => "On-chain".to_string(),
            },
            href: panel.uri.clone(),
        });
    }

    for link in &view.footer.links {
        entries.push(LinkEntry {
            section: "footer",
            name: link.link.label.clone(),
            href: Some(link.link.href.clone()),
        });
    }

    for app in &view.apps.items {
        entries.push(LinkEntry {
            section: "apps",
            name: app.name.clone(),
            href: non_empty(Some(app.href.as_str())).map(String::from),
        });
    }
    for bio in &view.bios.items {
        entries.push(LinkEntry {
            section: "bios",
            name: bio.name.clone(),
            href: non_empty(Some(bio.href.as_str())).map(String::from),
        });
    }
    if let Some(tools) = &view.tools {
        for tool in &tools.items {
            entries.push(LinkEntry {
                section: "tools",
                name: tool.name.clone(),
                href: tool.title_href.clone(),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_site::{parse_site, ConfigFormat};

    fn site(source: &str) -> SiteConfig {
        parse_site(source, ConfigFormat::Toml).unwrap()
    }

    #[test]
    fn contact_links_keep_display_order() {
        let config = site(
            r#"
[contact]
email = "hello@shabito.net"
x_handle = "@byshabito"
instagram_handle = "by_shabito"
threads_handle = "by_shabito"
"#,
        );

        let view = PageView::from_config(&config);
        let icons: Vec<&str> = view.contact.links.iter().map(|l| l.icon).collect();
        assert_eq!(icons, ["mail", "x", "threads", "instagram"]);

        let x = &view.contact.links[1].link;
        assert_eq!(x.label, "@byshabito");
        assert_eq!(x.href, "https://x.com/byshabito");
    }

    #[test]
    fn override_only_contacts_are_hidden() {
        let config = site(
            r#"
[contact]
x_url = "https://x.com/someone"
email_url = "https://forms.example"
"#,
        );

        let view = PageView::from_config(&config);
        assert!(view.contact.links.is_empty());
        assert!(view.footer.links.is_empty());

        let report = link_report(&config);
        let contact: Vec<&LinkEntry> = report.iter().filter(|e| e.section == "contact").collect();
        assert!(contact.iter().all(|e| e.href.is_none()));
    }

    #[test]
    fn override_url_wins_when_handle_is_set() {
        let config = site(
            r#"
[contact]
email = "hello@shabito.net"
email_url = "https://forms.example"
instagram_handle = "by_shabito"
instagram_url = "https://instagram.com/custom"
"#,
        );

        let links = PageView::from_config(&config).contact.links;

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].link.label, "hello@shabito.net");
        assert_eq!(links[0].link.href, "https://forms.example");
        assert_eq!(links[1].link.label, "@by_shabito");
        assert_eq!(links[1].link.href, "https://instagram.com/custom");
    }

    #[test]
    fn missing_identities_are_omitted() {
        let view = PageView::from_config(&SiteConfig::default());

        assert!(view.contact.links.is_empty());
        assert_eq!(view.support.chaturbate_href, None);
        assert_eq!(view.support.buy_me_a_coffee_href, None);
        assert!(view.footer.links.is_empty());
    }

    #[test]
    fn support_panels_resolve_wallet_uris() {
        let config = site(
            r#"
[support]
chaturbate_username = "shabito"
buy_me_a_coffee_url = "https://buymeacoffee.com/custom"
lightning = "lnbc10u1p3xyz"
onchain_address = "bc1qe5zla3d"
"#,
        );

        let support = PageView::from_config(&config).support;

        assert_eq!(
            support.chaturbate_href.as_deref(),
            Some("https://chaturbate.com/shabito/")
        );
        assert_eq!(
            support.buy_me_a_coffee_href.as_deref(),
            Some("https://buymeacoffee.com/custom")
        );
        assert_eq!(support.payment_mode, PaymentMode::Lightning);

        let lightning = &support.payments[0];
        assert_eq!(lightning.uri.as_deref(), Some("lightning:lnbc10u1p3xyz"));
        assert_eq!(lightning.copy_key, "lightning-copy");
        assert!(lightning.expiring);

        let onchain = &support.payments[1];
        assert_eq!(onchain.uri.as_deref(), Some("bitcoin:bc1qe5zla3d"));
        assert_eq!(onchain.value.as_deref(), Some("bc1qe5zla3d"));
        assert!(!onchain.expiring);
    }

    #[test]
    fn service_cards_start_in_token_mode() {
        let view = PageView::from_config(&SiteConfig::default());

        assert_eq!(view.services.cards.len(), 2);
        for card in &view.services.cards {
            assert_eq!(card.price_mode, PriceMode::Tokens);
        }
        assert_eq!(view.services.cards[0].price_tokens, "1,000");
        assert_eq!(view.services.cards[1].price_usd, "35");
        assert_eq!(view.services.cards[1].index, 1);
    }

    #[test]
    fn tools_fall_back_to_inquiry_mail() {
        let config = site(
            r#"
[tools]
enabled = true
contact_email = "tools@shabito.net"

[[tools.items]]
name = "BioCraft"
description = "Ready-to-use bios."

[[tools.items]]
name = "RoomPulse"
description = "Local-first analytics."
repo_url = "https://github.com/byshabito/roompulse"
"#,
        );

        let tools = PageView::from_config(&config).tools.unwrap();

        let biocraft = &tools.items[0];
        assert_eq!(
            biocraft.title_href.as_deref(),
            Some("mailto:tools@shabito.net?subject=Question%20about%20%22BioCraft%22")
        );
        assert!(!biocraft.external);

        let roompulse = &tools.items[1];
        assert_eq!(
            roompulse.title_href.as_deref(),
            Some("https://github.com/byshabito/roompulse")
        );
        assert!(roompulse.external);
    }

    #[test]
    fn tools_hidden_by_default() {
        assert!(PageView::from_config(&SiteConfig::default()).tools.is_none());
    }

    #[test]
    fn footer_mirrors_contact_without_explicit_links() {
        let config = site(
            r#"
[contact]
email = "hello@shabito.net"
x_handle = "byshabito"

[support]
chaturbate_username = "shabito"
"#,
        );

        let footer = PageView::from_config(&config).footer;
        let labels: Vec<&str> = footer.links.iter().map(|l| l.link.label.as_str()).collect();
        assert_eq!(labels, ["Email", "X", "Chaturbate"]);
    }

    #[test]
    fn explicit_footer_links_replace_derived_ones() {
        let config = site(
            r#"
[contact]
email = "hello@shabito.net"

[[footer.links]]
platform = "github"
handle = "byshabito"

[[footer.links]]
platform = "nostr"
"#,
        );

        let footer = PageView::from_config(&config).footer;
        assert_eq!(footer.links.len(), 1);
        assert_eq!(footer.links[0].link.href, "https://github.com/byshabito");
        assert_eq!(footer.links[0].icon, "github");
    }

    #[test]
    fn base_url_gets_single_trailing_slash() {
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("https://shabito.net"), "https://shabito.net/");
        assert_eq!(normalize_base_url("/site//"), "/site/");
    }

    #[test]
    fn report_lists_hidden_links() {
        let config = site(
            r#"
[contact]
x_handle = "byshabito"
"#,
        );

        let report = link_report(&config);

        let x = report.iter().find(|e| e.name == "X").unwrap();
        assert_eq!(x.href.as_deref(), Some("https://x.com/byshabito"));

        let cb = report
            .iter()
            .find(|e| e.section == "support" && e.name == "Chaturbate")
            .unwrap();
        assert_eq!(cb.href, None);
    }
}
