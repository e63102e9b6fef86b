//! Template engine for rendering the landing page.

use minijinja::{context, Environment, Value};

use crate::icons::icon_svg;
use crate::view::PageView;

/// Context for rendering the landing template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page view model
    pub page: PageView,
    /// Extra stylesheets, relative to the base URL
    pub styles: Vec<String>,
    /// Inline scripts appended to the body
    pub scripts: Vec<String>,
}

impl Context {
    pub fn new(page: PageView) -> Self {
        Self {
            page,
            styles: Vec::new(),
            scripts: Vec::new(),
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", BASE_TEMPLATE),
    ("landing.html", LANDING_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("services.html", SERVICES_TEMPLATE),
    ("apps.html", APPS_TEMPLATE),
    ("bios.html", BIOS_TEMPLATE),
    ("tools.html", TOOLS_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("support.html", SUPPORT_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("error.html", ERROR_TEMPLATE),
];

/// `{{ icon("mail") }}`; unknown names render nothing.
fn icon(name: String) -> Value {
    Value::from_safe_string(icon_svg(&name).unwrap_or_default())
}

impl TemplateEngine {
    /// Create a template engine with the built-in landing templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())?;
        }
        env.add_function("icon", icon);

        Ok(Self { env })
    }

    /// Render a page using the specified template.
    pub fn render_page(&self, template: &str, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            page => &context.page,
            styles => &context.styles,
            scripts => &context.scripts,
        })
    }

    /// Render the landing page.
    pub fn render_landing(&self, context: &Context) -> Result<String, minijinja::Error> {
        self.render_page("landing.html", context)
    }

    /// Render a standalone error page, e.g. for an invalid config during development.
    pub fn render_error(
        &self,
        title: &str,
        message: &str,
        scripts: &[String],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("error.html")?;

        tmpl.render(context! {
            title => title,
            message => message,
            scripts => scripts,
        })
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ page.lang }}" data-theme-key="{{ page.runtime.theme_key }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ page.title }}</title>
  {% if page.description %}<meta name="description" content="{{ page.description }}">
  {% endif %}<script>
    (function () {
      var root = document.documentElement;
      try {
        var stored = localStorage.getItem(root.dataset.themeKey);
        var dark = stored ? stored === "dark" : window.matchMedia("(prefers-color-scheme: dark)").matches;
        root.classList.toggle("dark", dark);
      } catch (e) {}
    })();
  </script>
  <link rel="stylesheet" href="{{ page.base_url }}assets/main.css">
  {% for style in styles %}<link rel="stylesheet" href="{{ page.base_url }}{{ style }}">
  {% endfor %}
</head>
<body data-copy-delay="{{ page.runtime.copy_delay_ms }}">
  {% block body %}{% endblock %}
  <script src="{{ page.base_url }}assets/main.js"></script>
  {% for script in scripts %}
  <script>{{ script | safe }}</script>
  {% endfor %}
</body>
</html>"##;

const LANDING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body %}
<div class="backdrop" aria-hidden="true"></div>
{% include "nav.html" %}
<main>
  {% include "hero.html" %}
  {% include "services.html" %}
  {% include "apps.html" %}
  {% include "bios.html" %}
  {% if page.tools %}{% include "tools.html" %}{% endif %}
  {% include "contact.html" %}
  {% include "support.html" %}
</main>
{% include "footer.html" %}
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"<header class="site-header">
  <div class="container header-inner">
    <a href="#" class="brand">
      {% if page.brand.avatar %}<img class="brand-avatar" src="{{ page.brand.avatar }}" alt="{{ page.brand.name }}">
      {% else %}<span class="brand-avatar brand-initial" aria-hidden="true">{{ page.brand.initial }}</span>
      {% endif %}<span class="brand-name">{{ page.brand.name }}</span>
    </a>
    <nav class="nav-links" data-nav aria-label="Main">
      {% for link in page.nav %}<a href="{{ link.href }}">{{ link.label }}</a>
      {% endfor %}
    </nav>
    <div class="header-actions">
      <button type="button" class="icon-button" data-theme-toggle aria-label="Toggle dark mode">
        <span class="theme-light">{{ icon("moon") }}</span>
        <span class="theme-dark">{{ icon("sun") }}</span>
      </button>
      <a href="#contact" class="button button-small">Contact</a>
      <button type="button" class="icon-button nav-toggle" data-nav-toggle aria-expanded="false" aria-label="Open menu">
        <span class="nav-toggle-bar"></span>
      </button>
    </div>
  </div>
</header>"##;

const HERO_TEMPLATE: &str = r##"<section class="hero">
  <div class="container hero-inner">
    <h1>{{ page.hero.title }}</h1>
    {% if page.hero.lede_html %}<p class="lede">{{ page.hero.lede_html | safe }}</p>
    {% endif %}{% if page.hero.primary_cta or page.hero.secondary_cta %}
    <div class="hero-actions">
      {% if page.hero.primary_cta %}<a class="button" href="{{ page.hero.primary_cta.href }}">{{ page.hero.primary_cta.label }}</a>
      {% endif %}{% if page.hero.secondary_cta %}<a class="button button-ghost" href="{{ page.hero.secondary_cta.href }}">{{ page.hero.secondary_cta.label }}</a>
      {% endif %}
    </div>
    {% endif %}
  </div>
</section>"##;

const SERVICES_TEMPLATE: &str = r##"<section id="services" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.services.title }}</h2>
    {% if page.services.subtitle_html %}<p class="section-subtitle">{{ page.services.subtitle_html | safe }}</p>
    {% endif %}
    <div class="grid grid-2">
      {% for card in page.services.cards %}
      <article class="card service-card" data-price-card="{{ card.index }}" data-price-mode="{{ card.price_mode }}">
        <div class="service-head">
          <div class="icon-badge">{{ icon(card.icon) }}</div>
          <h3 class="card-title">{{ card.title }}</h3>
          <button type="button" class="price-chip" data-price-toggle title="Click to toggle price" aria-label="Toggle starting price between tokens and USD" aria-pressed="{% if card.price_mode == "usd" %}true{% else %}false{% endif %}">
            <span class="price-tokens">From <strong>{{ card.price_tokens }}</strong> tokens</span>
            <span class="price-usd">From <strong>${{ card.price_usd }}</strong></span>
          </button>
        </div>
        {% if card.description_html %}<p class="card-text">{{ card.description_html | safe }}</p>
        {% endif %}{% if card.includes %}
        <ul class="includes">
          {% for line in card.includes %}<li>{{ line }}</li>
          {% endfor %}
        </ul>
        {% endif %}
        <a class="button button-block" href="{{ card.cta.href }}" aria-label="{{ card.cta_aria_label }}">{{ card.cta.label }}</a>
      </article>
      {% endfor %}
    </div>
  </div>
</section>"##;

const APPS_TEMPLATE: &str = r##"<section id="apps" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.apps.title }}</h2>
    {% if page.apps.subtitle_html %}<p class="section-subtitle">{{ page.apps.subtitle_html | safe }}</p>
    {% endif %}{% if page.apps.items %}
    <div class="grid grid-3">
      {% for app in page.apps.items %}
      <a class="card app-card" href="{{ app.href }}" target="_blank" rel="noreferrer noopener" aria-label="{{ app.aria_label }}" data-key="{{ app.key }}">
        <div class="app-head">
          {% if app.logo_url %}<img class="app-logo" src="{{ app.logo_url }}" alt="" loading="lazy">
          {% else %}<span class="app-logo app-initial" aria-hidden="true">{{ app.initial }}</span>
          {% endif %}<h3 class="card-title">{{ app.name }}</h3>
          {% if app.tag %}<span class="chip">{{ app.tag }}</span>{% endif %}
        </div>
        <p class="card-text">{{ app.description_html | safe }}</p>
      </a>
      {% endfor %}
    </div>
    {% else %}
    <p class="notice">Add apps under <code>[[apps.items]]</code>.</p>
    {% endif %}
  </div>
</section>"##;

const BIOS_TEMPLATE: &str = r##"<section id="bios" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.bios.title }}</h2>
    {% if page.bios.subtitle_html %}<p class="section-subtitle">{{ page.bios.subtitle_html | safe }}</p>
    {% endif %}{% if page.bios.items %}
    <div class="grid grid-3">
      {% for bio in page.bios.items %}
      <a class="card bio-card" href="{{ bio.href }}" target="_blank" rel="noreferrer noopener" aria-label="{{ bio.aria_label }}" data-key="{{ bio.key }}"{% if bio.accent %} style="border-color: {{ bio.accent }}"{% endif %}>
        {% if bio.preview_url %}<img class="bio-preview" src="{{ bio.preview_url }}" alt="{{ bio.name }} bio preview" loading="lazy">
        {% else %}<div class="bio-preview bio-fallback" style="background-color: {{ bio.fallback_color }}" aria-hidden="true">{{ bio.initial }}</div>
        {% endif %}<div class="bio-meta">
          <h3 class="card-title">{{ bio.name }}</h3>
          {% if bio.tag %}<span class="chip">{{ bio.tag }}</span>{% endif %}
        </div>
      </a>
      {% endfor %}
    </div>
    {% else %}
    <p class="notice">Add bios under <code>[[bios.items]]</code>.</p>
    {% endif %}
  </div>
</section>"##;

const TOOLS_TEMPLATE: &str = r##"<section id="tools" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.tools.title }}</h2>
    {% if page.tools.subtitle_html %}<p class="section-subtitle">{{ page.tools.subtitle_html | safe }}</p>
    {% endif %}
    <div class="grid grid-2">
      {% for tool in page.tools.items %}
      <article class="card tool-card" data-key="{{ tool.key }}">
        <div class="app-head">
          {% if tool.logo_url %}<img class="app-logo" src="{{ tool.logo_url }}" alt="" loading="lazy">
          {% else %}<span class="app-logo app-initial" aria-hidden="true">{{ tool.initial }}</span>
          {% endif %}<h3 class="card-title">
            {% if tool.title_href %}<a href="{{ tool.title_href }}"{% if tool.external %} target="_blank" rel="noreferrer noopener"{% endif %}>{{ tool.name }}</a>
            {% else %}{{ tool.name }}{% endif %}
          </h3>
          {% if tool.repo_url %}<a class="icon-button" href="{{ tool.repo_url }}" target="_blank" rel="noreferrer noopener" aria-label="Source code for {{ tool.name }}">{{ icon("github") }}</a>{% endif %}
        </div>
        <p class="card-text">{{ tool.description_html | safe }}</p>
      </article>
      {% endfor %}
    </div>
  </div>
</section>"##;

const CONTACT_TEMPLATE: &str = r##"<section id="contact" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.contact.title }}</h2>
    {% if page.contact.subtitle_html %}<p class="section-subtitle">{{ page.contact.subtitle_html | safe }}</p>
    {% endif %}{% if page.contact.links %}
    <div class="contact-links">
      {% for link in page.contact.links %}<a class="card contact-link" href="{{ link.href }}"{% if link.external %} target="_blank" rel="noreferrer noopener"{% endif %} aria-label="{{ link.aria_label }}">
        <span class="icon-badge">{{ icon(link.icon) }}</span>
        <span class="contact-label">{{ link.label }}</span>
      </a>
      {% endfor %}
    </div>
    {% else %}
    <p class="notice">Set <code>contact.email</code> or a handle such as <code>contact.x_handle</code>.</p>
    {% endif %}
  </div>
</section>"##;

const SUPPORT_TEMPLATE: &str = r##"<section id="support" class="section">
  <div class="container">
    <h2 class="section-title">{{ page.support.title }}</h2>
    {% if page.support.subtitle_html %}<p class="section-subtitle">{{ page.support.subtitle_html | safe }}</p>
    {% endif %}
    <div class="grid grid-2">
      <div class="card">
        <div class="card-head">
          <span class="icon-badge">{{ icon("coins") }}</span>
          <h3 class="card-title">Chaturbate Tokens</h3>
        </div>
        <p class="card-text">Tip tokens on my Chaturbate room.</p>
        {% if page.support.chaturbate_href %}<a class="button" href="{{ page.support.chaturbate_href }}" target="_blank" rel="noreferrer noopener" aria-label="Visit my Chaturbate room (opens in new tab)">{{ icon("external") }} Visit my room</a>
        {% else %}<p class="notice">Set <code>support.chaturbate_username</code> or <code>support.chaturbate_url</code>.</p>
        {% endif %}
      </div>
      <div class="card">
        <div class="card-head">
          <span class="icon-badge">{{ icon("coffee") }}</span>
          <h3 class="card-title">Buy Me a Coffee</h3>
        </div>
        <p class="card-text">Quick one-time support.</p>
        {% if page.support.buy_me_a_coffee_href %}<a class="button" href="{{ page.support.buy_me_a_coffee_href }}" target="_blank" rel="noreferrer noopener" aria-label="Open Buy Me a Coffee (opens in new tab)">{{ icon("external") }} Open Buy Me a Coffee</a>
        {% else %}<p class="notice">Set <code>support.buy_me_a_coffee_username</code> or <code>support.buy_me_a_coffee_url</code>.</p>
        {% endif %}
      </div>
      <div class="card span-2" data-payment data-payment-mode="{{ page.support.payment_mode }}">
        <div class="card-head card-head-split">
          <div class="card-head">
            <span class="icon-badge">{{ icon("bitcoin") }}</span>
            <h3 class="card-title">Bitcoin</h3>
          </div>
          <div class="segmented" role="group" aria-label="Payment method">
            <button type="button" data-payment-toggle="lightning" aria-pressed="{% if page.support.payment_mode == "lightning" %}true{% else %}false{% endif %}">{{ icon("zap") }} Lightning</button>
            <button type="button" data-payment-toggle="onchain" aria-pressed="{% if page.support.payment_mode == "onchain" %}true{% else %}false{% endif %}">{{ icon("bitcoin") }} On-chain</button>
          </div>
        </div>
        {% for panel in page.support.payments %}
        <div class="payment-panel" data-payment-panel="{{ panel.mode }}">
          <div class="payment-value">
            <div class="caption">{{ panel.caption }}</div>
            {% if panel.value %}<div class="copy-field" role="button" tabindex="0" data-copy="{{ panel.value }}" data-copy-key="{{ panel.copy_key }}" aria-label="Copy address to clipboard" title="Click to copy">
              <code>{{ panel.value }}</code>
              <span class="copied" aria-hidden="true">{{ icon("check") }} Copied</span>
            </div>
            {% elif panel.mode == "lightning" %}<p class="notice">Set <code>support.lightning</code> (address, LNURL, or invoice).</p>
            {% else %}<p class="notice">Set <code>support.onchain_address</code>.</p>
            {% endif %}
          </div>
          <div class="payment-actions">
            {% if panel.expiring %}<span class="hint">Invoice may expire</span>
            {% endif %}{% if panel.uri %}<a class="button" href="{{ panel.uri }}" aria-label="Open in compatible wallet">{{ icon("external") }} Open in wallet</a>
            {% endif %}
          </div>
        </div>
        {% endfor %}
        <span class="sr-only" aria-live="polite" data-copy-status></span>
      </div>
    </div>
  </div>
</section>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="site-footer">
  <div class="container footer-inner">
    <p class="copyright">&copy; <span data-year></span> {{ page.footer.owner }}</p>
    {% if page.footer.links %}<div class="footer-links">
      {% for link in page.footer.links %}<a href="{{ link.href }}"{% if link.external %} target="_blank" rel="noreferrer noopener"{% endif %} aria-label="{{ link.label }}" title="{{ link.label }}">{{ icon(link.icon) }}</a>
      {% endfor %}
    </div>
    {% endif %}
  </div>
</footer>"##;

const ERROR_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 3rem auto; padding: 0 1rem; color: #111827; }
    h1 { font-size: 1.5rem; color: #be123c; }
    pre { background: #fff1f2; border: 1px solid #fecdd3; padding: 1rem; border-radius: 0.5rem; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  <pre>{{ message }}</pre>
  <p>Fix the file and save; the page reloads automatically.</p>
  {% for script in scripts %}
  <script>{{ script | safe }}</script>
  {% endfor %}
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_site::{parse_site, ConfigFormat, SiteConfig};

    fn render(config: &SiteConfig) -> String {
        let engine = TemplateEngine::new().unwrap();
        let context = Context::new(PageView::from_config(config));
        engine.render_landing(&context).unwrap()
    }

    fn site(source: &str) -> SiteConfig {
        parse_site(source, ConfigFormat::Toml).unwrap()
    }

    #[test]
    fn renders_every_section() {
        let html = render(&SiteConfig::default());

        assert!(html.contains("<title>My Site</title>"));
        for id in ["services", "apps", "bios", "contact", "support"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
        assert!(!html.contains("id=\"tools\""));
    }

    #[test]
    fn missing_chaturbate_shows_notice() {
        let html = render(&SiteConfig::default());

        assert!(html.contains("<code>support.chaturbate_username</code>"));
        assert!(!html.contains("Visit my room"));
    }

    #[test]
    fn configured_support_renders_actions() {
        let html = render(&site(
            r#"
[support]
chaturbate_username = "shabito"
lightning = "lnbc10u1p3xyz"
"#,
        ));

        assert!(html.contains("Visit my room"));
        assert!(html.contains("Invoice may expire"));
        assert!(html.contains("data-copy-key=\"lightning-copy\""));
        assert!(html.contains("data-payment-mode=\"lightning\""));
        assert!(html.contains("<code>support.onchain_address</code>"));
    }

    #[test]
    fn service_cards_start_in_token_mode() {
        let html = render(&SiteConfig::default());

        assert!(html.contains("data-price-mode=\"tokens\""));
        assert!(html.contains("From <strong>1,000</strong> tokens"));
        assert!(html.contains("aria-pressed=\"false\""));
    }

    #[test]
    fn contact_links_use_handle_labels() {
        let html = render(&site(
            r#"
[contact]
x_handle = "@@byshabito"
"#,
        ));

        assert!(html.contains(">@byshabito</span>"));
        assert!(html.contains("aria-label=\"Open X profile @byshabito in new tab\""));
    }

    #[test]
    fn escapes_config_text() {
        let html = render(&site(
            r#"
[hero]
title = "<script>alert(1)</script>"
"#,
        ));

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn includes_inline_scripts() {
        let engine = TemplateEngine::new().unwrap();
        let mut context = Context::new(PageView::from_config(&SiteConfig::default()));
        context.scripts.push("console.log(\"reload\")".to_string());

        let html = engine.render_landing(&context).unwrap();

        assert!(html.contains("<script>console.log(\"reload\")</script>"));
    }

    #[test]
    fn renders_escaped_error_page() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine
            .render_error("Invalid site config", "expected `=` near <title>", &[])
            .unwrap();

        assert!(html.contains("<h1>Invalid site config</h1>"));
        assert!(html.contains("near &lt;title&gt;"));
    }

    #[test]
    fn renders_icons_unescaped() {
        let html = render(&site(
            r#"
[contact]
email = "hello@shabito.net"
"#,
        ));

        assert!(html.contains("<svg class=\"icon\""));
    }
}
