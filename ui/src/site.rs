//! Root context: active locale, content client and settings store.

use std::rc::Rc;

use api::{ApiConfig, ContentClient, Locale};
use dioxus::prelude::*;

use crate::core::storage::{load_locale, save_locale, KeyValueStore};

/// Provided once at the root; every section reads the locale and client from here.
#[derive(Clone)]
pub struct SiteContext {
    pub locale: Signal<Locale>,
    pub client: ContentClient,
    pub store: Rc<dyn KeyValueStore>,
}

impl SiteContext {
    /// Current locale. Reading it during render subscribes the caller.
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    /// Current locale without subscribing (for event handlers and tasks).
    pub fn locale_untracked(&self) -> Locale {
        *self.locale.peek()
    }

    /// Persist `locale`, then switch to it. A failed write is logged and the
    /// switch still happens for this session.
    pub fn set_locale(&self, locale: Locale) {
        if let Err(err) = save_locale(self.store.as_ref(), locale) {
            tracing::warn!("[site] failed persisting locale {locale}: {err}");
        }
        let mut signal = self.locale;
        signal.set(locale);
    }
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && self.client == other.client
            && Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Build the context from `config` and `store` and provide it to the subtree.
/// The locale starts from whatever `store` holds.
pub fn use_site_provider(config: ApiConfig, store: Rc<dyn KeyValueStore>) -> SiteContext {
    let initial_store = store.clone();
    let locale = use_signal(move || load_locale(initial_store.as_ref()));
    use_context_provider(move || {
        tracing::info!("[site] content API at {}", config.base_url);
        SiteContext {
            locale,
            client: ContentClient::new(config),
            store,
        }
    })
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
