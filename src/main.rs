use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod components;
mod config;
mod media;
mod playback;
mod utils;

use components::VideoPlayer;
use config::PlayerConfig;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelplayer=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = PlayerConfig::load();
    tracing::info!(source = %config.source, "Starting reelplayer");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<PlayerConfig>();

    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: PLAYER_CSS }

        div { class: "app",
            VideoPlayer { src: config.source.to_string() }
        }
    }
}
