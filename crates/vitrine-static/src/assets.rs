//! Asset pipeline for the landing stylesheet, runtime script and HTML.

use regex::Regex;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the page runtime script.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Strip indentation and blank lines from rendered HTML.
    ///
    /// Line breaks are kept so inline text stays separated.
    pub fn minify_html(html: &str) -> String {
        match Regex::new(r"\n\s+") {
            Ok(indent) => indent.replace_all(html.trim(), "\n").into_owned(),
            Err(_) => html.to_string(),
        }
    }
}

const DEFAULT_CSS: &str = r#"/* vitrine landing theme */

:root {
  --bg: #ffffff;
  --fg: #111827;
  --muted: #4b5563;
  --subtle: #6b7280;
  --card: rgba(255, 255, 255, 0.7);
  --card-hover: rgba(255, 255, 255, 0.8);
  --border: #e5e7eb;
  --accent: #db2777;
  --accent-soft: #fdf2f8;
  --accent-border: #f9a8d4;
  --accent-text: #9d174d;
  --warn: #d97706;
  --ok: #15803d;
  --field: #f3f4f6;
  --gradient: linear-gradient(90deg, #db2777, #f43f5e, #f97316);
  --badge: linear-gradient(135deg, #fce7f3, #ffedd5);
  --radius: 1rem;
  --max-width: 64rem;
}

.dark {
  --bg: #030712;
  --fg: #f3f4f6;
  --muted: #9ca3af;
  --subtle: #9ca3af;
  --card: rgba(17, 24, 39, 0.7);
  --card-hover: rgba(17, 24, 39, 0.8);
  --border: #1f2937;
  --accent: #ec4899;
  --accent-soft: rgba(236, 72, 153, 0.1);
  --accent-border: #ec4899;
  --accent-text: #fce7f3;
  --warn: #fbbf24;
  --ok: #86efac;
  --field: #1f2937;
  --badge: linear-gradient(135deg, rgba(236, 72, 153, 0.1), rgba(249, 115, 22, 0.1));
  color-scheme: dark;
}

* {
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  line-height: 1.5;
  background: var(--bg);
  color: var(--fg);
}

a {
  color: inherit;
}

img {
  max-width: 100%;
}

code {
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.backdrop {
  position: fixed;
  inset: 0;
  z-index: -1;
  pointer-events: none;
  background:
    radial-gradient(1200px 600px at 80% -10%, rgba(236, 72, 153, 0.2), transparent 60%),
    radial-gradient(900px 500px at -10% 110%, rgba(249, 115, 22, 0.18), transparent 60%);
}

.container {
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 0 1rem;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.icon {
  width: 1rem;
  height: 1rem;
  flex-shrink: 0;
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  backdrop-filter: blur(12px);
  background: var(--card);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  min-height: 3.5rem;
}

.brand {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 600;
  text-decoration: none;
}

.brand-avatar {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  object-fit: cover;
}

.brand-initial,
.app-initial {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--badge);
  color: var(--accent-text);
  font-weight: 600;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  font-size: 0.875rem;
}

.nav-links a {
  color: var(--muted);
  text-decoration: none;
}

.nav-links a:hover {
  color: var(--fg);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: transparent;
  color: var(--fg);
  cursor: pointer;
}

.theme-dark,
.dark .theme-light {
  display: none;
}

.dark .theme-dark {
  display: inline-flex;
}

.nav-toggle {
  display: none;
}

.nav-toggle-bar,
.nav-toggle-bar::before,
.nav-toggle-bar::after {
  display: block;
  width: 1rem;
  height: 2px;
  background: currentColor;
  position: relative;
}

.nav-toggle-bar::before,
.nav-toggle-bar::after {
  content: "";
  position: absolute;
}

.nav-toggle-bar::before {
  top: -5px;
}

.nav-toggle-bar::after {
  top: 5px;
}

/* Buttons */
.button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.375rem;
  min-height: 2.5rem;
  padding: 0.5rem 0.75rem;
  border-radius: 0.75rem;
  background: var(--gradient);
  color: #ffffff;
  font-size: 0.8125rem;
  font-weight: 500;
  text-decoration: none;
  transition: transform 0.2s ease-out, box-shadow 0.2s ease-out;
}

.button:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 12px rgba(219, 39, 119, 0.25);
}

.button-small {
  min-height: 2.25rem;
}

.button-block {
  width: 100%;
  min-height: 2.75rem;
}

.button-ghost {
  background: transparent;
  color: var(--fg);
  border: 1px solid var(--accent-border);
}

:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

/* Hero */
.hero {
  padding: 5rem 0 3rem;
  text-align: center;
}

.hero h1 {
  margin: 0 0 1rem;
  font-size: clamp(2rem, 5vw, 3.25rem);
  letter-spacing: -0.02em;
}

.lede {
  max-width: 40rem;
  margin: 0 auto 1.5rem;
  color: var(--muted);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

/* Sections */
.section {
  padding: 3rem 0;
  scroll-margin-top: 4rem;
}

.section-title {
  margin: 0 0 0.75rem;
  text-align: center;
  font-size: 1.5rem;
  font-weight: 600;
  letter-spacing: -0.01em;
}

.section-subtitle {
  margin: 0 0 1.5rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--muted);
}

.grid {
  display: grid;
  gap: 1rem;
}

.grid-2 {
  grid-template-columns: repeat(2, minmax(0, 1fr));
}

.grid-3 {
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.span-2 {
  grid-column: span 2;
}

.card {
  display: block;
  padding: 1.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  text-decoration: none;
  transition: transform 0.2s ease-out, box-shadow 0.2s ease-out, border-color 0.2s ease-out;
}

.card:hover {
  transform: translateY(-2px);
  background: var(--card-hover);
  border-color: var(--accent-border);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}

.card-head {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.card-head-split {
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.card-title {
  margin: 0;
  font-size: 1rem;
  font-weight: 500;
}

.card-text {
  margin: 0.5rem 0 0.75rem;
  font-size: 0.875rem;
  color: var(--muted);
}

.icon-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.75rem;
  background: var(--badge);
  color: var(--accent-text);
}

.chip {
  display: inline-block;
  padding: 0.125rem 0.5rem;
  border: 1px solid var(--accent-border);
  border-radius: 9999px;
  background: var(--accent-soft);
  color: var(--accent-text);
  font-size: 0.6875rem;
}

.notice {
  font-size: 0.75rem;
  color: var(--warn);
}

/* Services */
.service-head {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.service-head .card-title {
  flex: 1;
  min-width: 0;
}

.price-chip {
  display: inline-flex;
  align-items: center;
  padding: 0.25rem 0.625rem;
  border: 1px solid var(--accent-border);
  border-radius: 0.5rem;
  background: var(--accent-soft);
  color: var(--accent-text);
  font-size: 0.6875rem;
  cursor: pointer;
}

.price-chip strong {
  margin: 0 0.25rem;
}

[data-price-mode="tokens"] .price-usd,
[data-price-mode="usd"] .price-tokens {
  display: none;
}

.includes {
  margin: 0 0 1rem;
  padding: 0;
  list-style: none;
  font-size: 0.875rem;
}

.includes li {
  display: flex;
  gap: 0.5rem;
}

.includes li::before {
  content: "\2022";
  color: var(--accent-border);
}

/* Galleries */
.app-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.app-head .card-title {
  flex: 1;
  min-width: 0;
}

.app-logo {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  object-fit: cover;
}

.bio-card {
  padding: 0;
  overflow: hidden;
  border-width: 2px;
}

.bio-preview {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  font-size: 2rem;
  font-weight: 600;
  color: #ffffff;
}

.bio-meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
}

/* Contact */
.contact-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.contact-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
}

.contact-label {
  font-size: 0.875rem;
  font-weight: 500;
}

/* Support */
.segmented {
  display: inline-flex;
  padding: 2px;
  border: 1px solid var(--accent-border);
  border-radius: 0.75rem;
  background: var(--accent-soft);
  font-size: 0.75rem;
  font-weight: 500;
}

.segmented button {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.25rem 0.5rem;
  border: 0;
  border-radius: 0.5rem;
  background: transparent;
  color: var(--accent-text);
  cursor: pointer;
}

.segmented button[aria-pressed="true"] {
  background: var(--gradient);
  color: #ffffff;
}

.payment-panel {
  display: grid;
  grid-template-columns: minmax(0, 1fr) auto;
  gap: 0.75rem;
}

[data-payment-mode="lightning"] [data-payment-panel="onchain"],
[data-payment-mode="onchain"] [data-payment-panel="lightning"] {
  display: none;
}

.caption {
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--subtle);
}

.copy-field {
  position: relative;
  overflow-x: auto;
  border-radius: 0.5rem;
  background: var(--field);
  cursor: pointer;
  scrollbar-width: none;
}

.copy-field code {
  display: inline-block;
  padding: 0.5rem;
  font-size: 0.875rem;
  white-space: nowrap;
  user-select: all;
}

.copied {
  position: absolute;
  top: 0.25rem;
  right: 0.5rem;
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.25rem 0.5rem;
  border-radius: 0.375rem;
  background: var(--card-hover);
  color: var(--ok);
  font-size: 0.75rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.2s;
}

.copy-field[data-copied] .copied {
  opacity: 1;
}

.payment-actions {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  justify-content: flex-end;
  gap: 0.5rem;
}

.hint {
  font-size: 0.6875rem;
  color: var(--subtle);
}

/* Footer */
.site-footer {
  padding: 2rem 0;
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--muted);
}

.footer-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.footer-links {
  display: flex;
  gap: 0.75rem;
}

.footer-links a:hover {
  color: var(--accent);
}

/* Responsive */
@media (max-width: 640px) {
  .grid-2,
  .grid-3 {
    grid-template-columns: minmax(0, 1fr);
  }

  .span-2 {
    grid-column: auto;
  }

  .payment-panel {
    grid-template-columns: minmax(0, 1fr);
  }

  .payment-actions {
    align-items: stretch;
  }

  .nav-toggle {
    display: inline-flex;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 3.5rem;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
  }

  .nav-links.open {
    display: flex;
  }

  .footer-inner {
    flex-direction: column;
  }
}

@media (prefers-reduced-motion: reduce) {
  * {
    transition: none;
    scroll-behavior: auto;
  }
}
"#;

const DEFAULT_JS: &str = r#"// vitrine page runtime
(function() {
  'use strict';

  const root = document.documentElement;
  const themeKey = root.dataset.themeKey || 'theme';
  const copyDelay = Number(document.body.dataset.copyDelay) || 1600;

  // Enter and Space activate role="button" elements
  function onActivate(el, handler) {
    el.addEventListener('click', handler);
    if (el.tagName !== 'BUTTON') {
      el.addEventListener('keydown', (event) => {
        if (event.key === 'Enter' || event.key === ' ') {
          event.preventDefault();
          handler(event);
        }
      });
    }
  }

  // Theme toggle
  document.querySelectorAll('[data-theme-toggle]').forEach((button) => {
    button.addEventListener('click', () => {
      const dark = root.classList.toggle('dark');
      try {
        localStorage.setItem(themeKey, dark ? 'dark' : 'light');
      } catch (err) {}
    });
  });

  // Mobile menu
  const navToggle = document.querySelector('[data-nav-toggle]');
  const nav = document.querySelector('[data-nav]');
  if (navToggle && nav) {
    navToggle.addEventListener('click', () => {
      const open = nav.classList.toggle('open');
      navToggle.setAttribute('aria-expanded', String(open));
    });
    nav.querySelectorAll('a').forEach((link) => {
      link.addEventListener('click', () => {
        nav.classList.remove('open');
        navToggle.setAttribute('aria-expanded', 'false');
      });
    });
  }

  // Per-card price mode, independent for each card
  document.querySelectorAll('[data-price-card]').forEach((card) => {
    const toggle = card.querySelector('[data-price-toggle]');
    if (!toggle) return;
    onActivate(toggle, () => {
      const next = card.dataset.priceMode === 'usd' ? 'tokens' : 'usd';
      card.dataset.priceMode = next;
      toggle.setAttribute('aria-pressed', String(next === 'usd'));
    });
  });

  // Copy feedback: one active key, the newest copy wins
  let activeKey = null;
  let expiry = null;

  function renderCopied() {
    document.querySelectorAll('[data-copy-key]').forEach((el) => {
      if (el.dataset.copyKey === activeKey) {
        el.setAttribute('data-copied', '');
      } else {
        el.removeAttribute('data-copied');
      }
    });
    document.querySelectorAll('[data-copy-status]').forEach((status) => {
      status.textContent = activeKey ? 'Copied to clipboard' : '';
    });
  }

  function copy(text, key) {
    if (!text || !navigator.clipboard) return;
    navigator.clipboard.writeText(text).then(() => {
      activeKey = key;
      clearTimeout(expiry);
      expiry = setTimeout(() => {
        activeKey = null;
        renderCopied();
      }, copyDelay);
      renderCopied();
    }, () => {});
  }

  document.querySelectorAll('[data-copy]').forEach((field) => {
    onActivate(field, () => copy(field.dataset.copy, field.dataset.copyKey));
  });

  // Payment method toggle
  document.querySelectorAll('[data-payment]').forEach((block) => {
    const buttons = block.querySelectorAll('[data-payment-toggle]');
    buttons.forEach((button) => {
      button.addEventListener('click', () => {
        const mode = button.dataset.paymentToggle;
        block.dataset.paymentMode = mode;
        buttons.forEach((other) => {
          other.setAttribute('aria-pressed', String(other === button));
        });
      });
    });
  });

  // Footer year
  document.querySelectorAll('[data-year]').forEach((el) => {
    el.textContent = String(new Date().getFullYear());
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".dark"));
        assert!(css.contains("[data-price-mode=\"usd\"] .price-tokens"));
        assert!(css.contains("[data-payment-mode=\"lightning\"] [data-payment-panel=\"onchain\"]"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("clipboard"));
        assert!(js.contains("clearTimeout(expiry)"));
        assert!(js.contains("localStorage.setItem(themeKey"));
        assert!(js.contains("getFullYear"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn minifies_bundled_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
    }

    #[test]
    fn minifies_html_whitespace() {
        let html = "<ul>\n    <li>One</li>\n\n    <li>Two</li>\n</ul>\n";

        assert_eq!(
            AssetPipeline::minify_html(html),
            "<ul>\n<li>One</li>\n<li>Two</li>\n</ul>"
        );
    }
}
