use super::with_media;
use crate::components::Icon;
use crate::playback::PlaybackState;
use dioxus::prelude::*;

/// Play/Pause button - flips the intent, the player effect drives the element
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut state = use_context::<Signal<PlaybackState>>();
    let playing = use_memo(move || state.read().is_playing());

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "play",
            onclick: move |_| {
                let intent = state.write().toggle();
                tracing::debug!(?intent, "playback toggled");
            },
            if playing() {
                Icon {
                    name: "pause-circle".to_string(),
                    class: "icon icon-lg".to_string(),
                }
            } else {
                Icon {
                    name: "play-circle".to_string(),
                    class: "icon icon-lg".to_string(),
                }
            }
        }
    }
}

#[component]
pub(super) fn SkipBackwardButton() -> Element {
    let mut state = use_context::<Signal<PlaybackState>>();

    rsx! {
        button {
            id: "replay-btn",
            r#type: "button",
            class: "replay",
            onclick: move |_| {
                with_media(|media| state.write().skip_backward(media));
            },
            Icon { name: "replay-5".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn SkipForwardButton() -> Element {
    let mut state = use_context::<Signal<PlaybackState>>();

    rsx! {
        button {
            id: "forward-btn",
            r#type: "button",
            class: "forward",
            onclick: move |_| {
                with_media(|media| state.write().skip_forward(media));
            },
            Icon { name: "forward-5".to_string(), class: "icon".to_string() }
        }
    }
}

/// Speed stepper - 0.25x steps, out-of-range presses do nothing
#[component]
pub(super) fn SpeedControl() -> Element {
    let mut state = use_context::<Signal<PlaybackState>>();
    let speed = use_memo(move || state.read().speed());
    let speed_label = speed();

    rsx! {
        div { class: "playback",
            button {
                id: "speed-down-btn",
                r#type: "button",
                class: "minus",
                onclick: move |_| {
                    with_media(|media| state.write().decrease_speed(media));
                },
                Icon { name: "minus-square".to_string(), class: "icon".to_string() }
            }
            div { class: "speed", "{speed_label}x" }
            button {
                id: "speed-up-btn",
                r#type: "button",
                class: "plus",
                onclick: move |_| {
                    with_media(|media| state.write().increase_speed(media));
                },
                Icon { name: "plus-square".to_string(), class: "icon".to_string() }
            }
        }
    }
}
