//! Video control surface - a native `<video>` element plus custom controls.
//! Media events flow into `PlaybackState`; the controls write element
//! properties back through `with_media`.

use crate::components::Icon;
use crate::media::{find_video_element, NativeMedia, VIDEO_ELEMENT_ID};
use crate::playback::{apply_intent, PlaybackState};
use dioxus::prelude::*;

mod controls;
mod progress_bar;

use controls::{PlayPauseButton, SkipBackwardButton, SkipForwardButton, SpeedControl};
use progress_bar::ProgressBar;

/// Run `f` against the player's video element if it is mounted.
fn with_media<R>(f: impl FnOnce(&NativeMedia) -> R) -> Option<R> {
    let Some(media) = find_video_element() else {
        tracing::debug!(id = VIDEO_ELEMENT_ID, "video element is not mounted");
        return None;
    };
    Some(f(&media))
}

#[component]
pub fn VideoPlayer(src: String) -> Element {
    let mut state = use_signal(PlaybackState::default);
    use_context_provider(|| state);

    // Only the intent drives play/pause, not every time update.
    let intent = use_memo(move || state.read().intent());
    use_effect(move || {
        let intent = intent();
        with_media(|media| {
            if let Err(err) = apply_intent(media, intent) {
                tracing::warn!(%err, ?intent, "could not apply playback intent");
            }
        });
    });

    let source_for_errors = src.clone();

    rsx! {
        div { class: "videoplayer",
            video {
                id: VIDEO_ELEMENT_ID,
                src: "{src}",
                preload: "metadata",
                playsinline: true,
                ontimeupdate: move |_| {
                    with_media(|media| state.write().on_time_update(media));
                },
                ondurationchange: move |_| {
                    with_media(|media| state.write().on_duration_change(media));
                },
                onloadedmetadata: move |_| {
                    with_media(|media| state.write().on_metadata_loaded(media));
                },
                onprogress: move |_| {
                    with_media(|media| state.write().on_progress(media));
                },
                onerror: move |_| {
                    tracing::warn!(source = %source_for_errors, "media element reported an error");
                },
            }
            ProgressBar {}
            div { class: "options",
                div { class: "slider",
                    Icon { name: "sliders".to_string(), class: "icon".to_string() }
                }
                div { class: "buttons",
                    SkipBackwardButton {}
                    PlayPauseButton {}
                    SkipForwardButton {}
                }
                SpeedControl {}
                div { class: "info",
                    Icon { name: "info".to_string(), class: "icon".to_string() }
                }
            }
        }
    }
}
