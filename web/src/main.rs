use api::ApiConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::core::storage::default_store;
use ui::{use_site_provider, Landing};

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_hook(default_store);
    use_site_provider(ApiConfig::from_env(), store);

    rsx! {
        Landing {}
    }
}
