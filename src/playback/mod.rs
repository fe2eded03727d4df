//! Playback state for the control surface, kept free of any DOM types so it
//! can be driven from tests through a mocked media element.

mod speed;
mod state;

pub use speed::*;
pub use state::*;
