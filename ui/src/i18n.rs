//! Internationalization (i18n) support for `uftacademy-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   uz/uftacademy-ui.ftl   (fallback/reference)
//!   ru/uftacademy-ui.ftl
//!   en/uftacademy-ui.ftl
//! ```
//!
//! Unlike a process-wide "current language", every lookup names its locale.
//! The [`Translator`] keeps one loader per [`Locale`], each holding that
//! locale's bundle with the `uz` bundle behind it, so a key missing from `ru`
//! or `en` still resolves to the Uzbek text.
//!
//! Usage in a component:
//! ```ignore
//! let locale = use_site().locale();
//! let label = t!(locale, "nav-about");
//! let same = translator().resolve(locale, "nav", "about");
//! ```
//!
//! Message ids are `{table}-{key}`; the tables are nav, hero, about, programs,
//! why-choose-us, testimonials, gallery, footer, final-cta, common and
//! application.

use api::Locale;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nAssets;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation macro bound to an explicit locale.
///
/// ```ignore
/// t!(locale, "nav-about")
/// ```
///
/// Expands to `fl!(loader(locale), ...)`, so ids are checked at compile time
/// against the fallback catalogue.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
}

/// Fluent "domain" (matches the package name and the FTL filename).
pub const DOMAIN: &str = "uftacademy-ui";

/// Folder name of the fallback catalogue.
pub const FALLBACK_LANGUAGE: &str = "uz";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static TRANSLATOR: Lazy<Translator> = Lazy::new(|| Translator::from_assets(&Localizations));

/// One Fluent loader per supported locale.
pub struct Translator {
    uz: FluentLanguageLoader,
    ru: FluentLanguageLoader,
    en: FluentLanguageLoader,
}

impl Translator {
    /// Build loaders for every locale from an embedded asset source.
    ///
    /// A locale whose bundle fails to load is left with only the fallback;
    /// the failure is logged.
    pub fn from_assets(assets: &dyn I18nAssets) -> Self {
        Self {
            uz: build_loader(assets, Locale::Uz),
            ru: build_loader(assets, Locale::Ru),
            en: build_loader(assets, Locale::En),
        }
    }

    pub fn loader(&self, locale: Locale) -> &FluentLanguageLoader {
        match locale {
            Locale::Uz => &self.uz,
            Locale::Ru => &self.ru,
            Locale::En => &self.en,
        }
    }

    /// Localized text for `{table}-{key}`, falling back to Uzbek and then to
    /// the empty string.
    pub fn resolve(&self, locale: Locale, table: &str, key: &str) -> String {
        let id = format!("{table}-{key}");
        let loader = self.loader(locale);
        if loader.has(&id) {
            loader.get(&id)
        } else {
            tracing::debug!("[i18n] no message {id} for {locale}");
            String::new()
        }
    }
}

fn build_loader(assets: &dyn I18nAssets, locale: Locale) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);

    let requested: Vec<LanguageIdentifier> = language_id(locale).into_iter().collect();
    if let Err(err) = i18n_embed::select(&loader, assets, &requested) {
        tracing::warn!("[i18n] failed loading {locale} ({err}); continuing with fallback");
    }
    loader
}

/// Language identifier of a locale's catalogue folder.
pub fn language_id(locale: Locale) -> Option<LanguageIdentifier> {
    locale.segment().parse().ok()
}

/// The process-wide translator over the embedded catalogues.
pub fn translator() -> &'static Translator {
    &TRANSLATOR
}

/// Loader for `locale`, as used by [`t!`](crate::t).
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    TRANSLATOR.loader(locale)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
