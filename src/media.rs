//! Binding to the native `<video>` element rendered by the player.
//! The browser owns decoding and buffering; this module only reads and writes
//! the handful of element properties the controls care about.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlMediaElement, HtmlVideoElement};

/// DOM id of the single video element owned by the player.
pub const VIDEO_ELEMENT_ID: &str = "reelplayer-video";

#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum MediaError {
    #[error("media element rejected {action}: {reason}")]
    Rejected {
        action: &'static str,
        reason: String,
    },
}

/// The subset of `HTMLMediaElement` the control surface drives.
#[cfg_attr(test, mockall::automock)]
pub trait MediaElement {
    fn play(&self) -> Result<(), MediaError>;
    fn pause(&self) -> Result<(), MediaError>;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn duration(&self) -> f64;
    /// End of the first buffered range, if anything is buffered yet.
    fn first_buffered_end(&self) -> Option<f64>;
    fn set_playback_rate(&self, rate: f64);
}

#[cfg(target_arch = "wasm32")]
pub type NativeMedia = HtmlVideoElement;

#[cfg(not(target_arch = "wasm32"))]
pub type NativeMedia = Detached;

/// Look up the player's video element.
#[cfg(target_arch = "wasm32")]
pub fn find_video_element() -> Option<NativeMedia> {
    let document = window()?.document()?;
    document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

/// Media bindings only exist in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn find_video_element() -> Option<NativeMedia> {
    None
}

#[cfg(target_arch = "wasm32")]
impl MediaElement for HtmlVideoElement {
    fn play(&self) -> Result<(), MediaError> {
        let promise = HtmlMediaElement::play(self).map_err(|e| MediaError::Rejected {
            action: "play",
            reason: format!("{e:?}"),
        })?;
        // Autoplay policy and aborted loads surface as promise rejections.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!(reason = ?e, "play request was rejected");
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), MediaError> {
        HtmlMediaElement::pause(self).map_err(|e| MediaError::Rejected {
            action: "pause",
            reason: format!("{e:?}"),
        })
    }

    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(self)
    }

    fn set_current_time(&self, seconds: f64) {
        HtmlMediaElement::set_current_time(self, seconds);
    }

    fn duration(&self) -> f64 {
        HtmlMediaElement::duration(self)
    }

    fn first_buffered_end(&self) -> Option<f64> {
        let buffered = HtmlMediaElement::buffered(self);
        if buffered.length() == 0 {
            return None;
        }
        buffered.end(0).ok()
    }

    fn set_playback_rate(&self, rate: f64) {
        HtmlMediaElement::set_playback_rate(self, rate);
    }
}

/// Stand-in handle for targets without a DOM. It has no values, so every
/// lookup yields `None` and the methods below can never run.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub enum Detached {}

#[cfg(not(target_arch = "wasm32"))]
impl MediaElement for Detached {
    fn play(&self) -> Result<(), MediaError> {
        match *self {}
    }

    fn pause(&self) -> Result<(), MediaError> {
        match *self {}
    }

    fn current_time(&self) -> f64 {
        match *self {}
    }

    fn set_current_time(&self, _seconds: f64) {
        match *self {}
    }

    fn duration(&self) -> f64 {
        match *self {}
    }

    fn first_buffered_end(&self) -> Option<f64> {
        match *self {}
    }

    fn set_playback_rate(&self, _rate: f64) {
        match *self {}
    }
}
