//! Player configuration: which media the player opens.
//!
//! The browser build reads `?src=` from the page URL. Host builds read
//! `REELPLAYER_SRC`. Anything missing or invalid falls back to the bundled
//! sample.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

pub const DEFAULT_SOURCE: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4";

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub const SOURCE_ENV_VAR: &str = "REELPLAYER_SRC";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const SOURCE_QUERY_PARAM: &str = "src";

const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "file", "blob", "data"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("media source is empty")]
    EmptySource,
    #[error("media source is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported media source scheme: {0}")]
    UnsupportedScheme(String),
}

/// Locator handed to the video element: an absolute URL or a path relative
/// to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource(String);

impl MediaSource {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptySource);
        }

        match Url::parse(trimmed) {
            Ok(url) if SUPPORTED_SCHEMES.contains(&url.scheme()) => Ok(Self(trimmed.to_string())),
            Ok(url) => Err(ConfigError::UnsupportedScheme(url.scheme().to_string())),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self(trimmed.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MediaSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub source: MediaSource,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            source: MediaSource(DEFAULT_SOURCE.to_string()),
        }
    }
}

impl PlayerConfig {
    /// Resolve the configuration for this launch.
    pub fn load() -> Self {
        Self::from_override(source_override())
    }

    fn from_override(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.parse::<MediaSource>() {
            Ok(source) => Self { source },
            Err(err) => {
                tracing::warn!(%err, raw = %raw, "ignoring configured media source");
                Self::default()
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn source_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(SOURCE_QUERY_PARAM)
}

#[cfg(not(target_arch = "wasm32"))]
fn source_override() -> Option<String> {
    std::env::var(SOURCE_ENV_VAR).ok()
}
