use std::rc::Rc;

use super::with_media;
use crate::playback::PlaybackState;
use crate::utils::format_time;
use dioxus::prelude::*;

/// Position of a click along the bar as a fraction of its width.
/// `None` while the bar has no width yet.
fn click_fraction(client_x: f64, bar_left: f64, bar_width: f64) -> Option<f64> {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return None;
    }
    Some(((client_x - bar_left) / bar_width).clamp(0.0, 1.0))
}

/// Grey fill behind the bar covering the buffered share of the media.
fn buffered_fill_style(loaded_percentage: f64) -> String {
    format!(
        "background-image: linear-gradient(to right, grey {loaded_percentage}%, transparent {loaded_percentage}%)"
    )
}

/// Seek bar - click anywhere to jump to that point of the video
#[component]
pub(super) fn ProgressBar() -> Element {
    let mut state = use_context::<Signal<PlaybackState>>();
    let mut bar = use_signal(|| None::<Rc<MountedData>>);

    let playback = state();
    let current_time = playback.current_time();
    let duration = playback.duration();
    let fill_style = buffered_fill_style(playback.loaded_percentage());
    let elapsed = format_time(current_time);

    let on_seek_click = move |evt: MouseEvent| {
        let client_x = evt.client_coordinates().x;
        let Some(bar) = bar() else {
            return;
        };
        spawn(async move {
            match bar.get_client_rect().await {
                Ok(rect) => {
                    if let Some(fraction) = click_fraction(client_x, rect.min_x(), rect.width()) {
                        with_media(|media| state.write().seek_to_fraction(media, fraction));
                    }
                }
                Err(err) => tracing::debug!(?err, "progress bar has no layout yet"),
            }
        });
    };

    rsx! {
        div {
            class: "progress-track",
            onmounted: move |evt: MountedEvent| bar.set(Some(evt.data())),
            onclick: on_seek_click,
            div { class: "progress-bar", style: "{fill_style}",
                progress {
                    class: "progress",
                    max: "{duration}",
                    value: "{current_time}",
                }
                span { class: "current-time", "{elapsed}" }
            }
        }
    }
}
