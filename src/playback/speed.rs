use std::fmt;

const QUARTERS_PER_UNIT: f64 = 4.0;
const MIN_QUARTERS: u8 = 1;
const MAX_QUARTERS: u8 = 8;
const NORMAL_QUARTERS: u8 = 4;

/// Playback rate, stored as a count of 0.25x steps so it can only hold
/// values on the grid between 0.25x and 2x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaybackSpeed(u8);

impl PlaybackSpeed {
    pub const MIN: Self = Self(MIN_QUARTERS);
    pub const MAX: Self = Self(MAX_QUARTERS);
    pub const NORMAL: Self = Self(NORMAL_QUARTERS);

    /// Rate to hand to the media element.
    pub fn rate(self) -> f64 {
        f64::from(self.0) / QUARTERS_PER_UNIT
    }

    /// One step faster, or `None` when already at the ceiling.
    pub fn faster(self) -> Option<Self> {
        (self < Self::MAX).then(|| Self(self.0 + 1))
    }

    /// One step slower, or `None` when already at the floor.
    pub fn slower(self) -> Option<Self> {
        (self > Self::MIN).then(|| Self(self.0 - 1))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rate())
    }
}
