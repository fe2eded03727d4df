//! The components module contains all shared components for our app.

mod icons;
mod player;

pub use icons::*;
pub use player::*;
