use crate::media::{MediaElement, MediaError};

use super::PlaybackSpeed;

/// Seconds moved by the replay/forward buttons.
pub const SKIP_STEP_SECONDS: f64 = 5.0;

/// What the user last asked the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackIntent {
    #[default]
    Paused,
    Playing,
}

impl PlaybackIntent {
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Drive the element towards `intent`.
pub fn apply_intent(media: &impl MediaElement, intent: PlaybackIntent) -> Result<(), MediaError> {
    match intent {
        PlaybackIntent::Playing => media.play(),
        PlaybackIntent::Paused => media.pause(),
    }
}

/// Element readings can be NaN (no metadata yet) or infinite (live streams).
fn sanitize_seconds(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Player state mirrored from the video element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    intent: PlaybackIntent,
    current_time: f64,
    duration: f64,
    buffered_end: f64,
    speed: PlaybackSpeed,
}

impl PlaybackState {
    pub fn intent(&self) -> PlaybackIntent {
        self.intent
    }

    pub fn is_playing(&self) -> bool {
        self.intent.is_playing()
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[cfg(test)]
    pub fn buffered_end(&self) -> f64 {
        self.buffered_end
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Share of the media that is buffered, in percent.
    pub fn loaded_percentage(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.buffered_end / self.duration * 100.0).clamp(0.0, 100.0)
    }

    pub fn toggle(&mut self) -> PlaybackIntent {
        self.intent = self.intent.toggled();
        self.intent
    }

    pub fn on_time_update(&mut self, media: &impl MediaElement) {
        self.current_time = sanitize_seconds(media.current_time());
        self.buffered_end = media
            .first_buffered_end()
            .map(sanitize_seconds)
            .unwrap_or(0.0);
    }

    pub fn on_duration_change(&mut self, media: &impl MediaElement) {
        self.duration = sanitize_seconds(media.duration());
    }

    /// A fresh source resets the element's rate, so push ours back.
    pub fn on_metadata_loaded(&mut self, media: &impl MediaElement) {
        self.on_duration_change(media);
        media.set_playback_rate(self.speed.rate());
    }

    pub fn on_progress(&mut self, media: &impl MediaElement) {
        if let Some(end) = media.first_buffered_end() {
            self.buffered_end = sanitize_seconds(end);
        }
    }

    /// Seek to `fraction` of the duration. Returns the new position, or
    /// `None` while the duration is still unknown.
    pub fn seek_to_fraction(&mut self, media: &impl MediaElement, fraction: f64) -> Option<f64> {
        if self.duration <= 0.0 || !fraction.is_finite() {
            return None;
        }
        let position = fraction.clamp(0.0, 1.0) * self.duration;
        media.set_current_time(position);
        self.current_time = position;
        tracing::debug!(position, "seek");
        Some(position)
    }

    pub fn skip_backward(&mut self, media: &impl MediaElement) -> f64 {
        self.skip_by(media, -SKIP_STEP_SECONDS)
    }

    pub fn skip_forward(&mut self, media: &impl MediaElement) -> f64 {
        self.skip_by(media, SKIP_STEP_SECONDS)
    }

    fn skip_by(&mut self, media: &impl MediaElement, delta: f64) -> f64 {
        let from = sanitize_seconds(media.current_time());
        let mut to = from + delta;
        // Zero means unknown or unbounded, which has no ceiling.
        if self.duration > 0.0 {
            to = to.min(self.duration);
        }
        let to = to.max(0.0);
        media.set_current_time(to);
        self.current_time = to;
        tracing::debug!(from, to, "skip");
        to
    }

    /// Returns whether the speed changed.
    pub fn increase_speed(&mut self, media: &impl MediaElement) -> bool {
        let next = self.speed.faster();
        self.change_speed(media, next)
    }

    /// Returns whether the speed changed.
    pub fn decrease_speed(&mut self, media: &impl MediaElement) -> bool {
        let next = self.speed.slower();
        self.change_speed(media, next)
    }

    fn change_speed(&mut self, media: &impl MediaElement, next: Option<PlaybackSpeed>) -> bool {
        let Some(next) = next else {
            tracing::trace!(speed = %self.speed, "speed already at limit");
            return false;
        };
        self.speed = next;
        media.set_playback_rate(next.rate());
        tracing::debug!(speed = %next, "playback speed changed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MockMediaElement;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn state_with_duration(duration: f64) -> PlaybackState {
        let mut media = MockMediaElement::new();
        media.expect_duration().return_const(duration);
        let mut state = PlaybackState::default();
        state.on_duration_change(&media);
        state
    }

    #[test]
    fn starts_paused_at_normal_speed() {
        let state = PlaybackState::default();
        assert_eq!(state.intent(), PlaybackIntent::Paused);
        assert_eq!(state.speed(), PlaybackSpeed::NORMAL);
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.loaded_percentage(), 0.0);
    }

    #[test]
    fn double_toggle_plays_then_pauses() {
        let mut media = MockMediaElement::new();
        let mut seq = Sequence::new();
        media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        media
            .expect_pause()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let mut state = PlaybackState::default();
        let first = state.toggle();
        apply_intent(&media, first).unwrap();
        let second = state.toggle();
        apply_intent(&media, second).unwrap();

        assert_eq!(first, PlaybackIntent::Playing);
        assert_eq!(second, PlaybackIntent::Paused);
        assert!(!state.is_playing());
    }

    #[test]
    fn apply_intent_surfaces_rejection() {
        let mut media = MockMediaElement::new();
        media.expect_play().returning(|| {
            Err(MediaError::Rejected {
                action: "play",
                reason: "NotAllowedError".to_string(),
            })
        });
        let err = apply_intent(&media, PlaybackIntent::Playing).unwrap_err();
        assert!(err.to_string().contains("NotAllowedError"));
    }

    #[test]
    fn time_update_tracks_position_and_buffer() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 12.5);
        media.expect_first_buffered_end().returning(|| Some(25.0));

        state.on_time_update(&media);

        assert_eq!(state.current_time(), 12.5);
        assert_eq!(state.buffered_end(), 25.0);
        assert_eq!(state.loaded_percentage(), 25.0);
    }

    #[test]
    fn time_update_without_buffer_resets_loaded() {
        let mut state = state_with_duration(100.0);
        let mut buffered = MockMediaElement::new();
        buffered.expect_first_buffered_end().returning(|| Some(40.0));
        state.on_progress(&buffered);
        assert_eq!(state.loaded_percentage(), 40.0);

        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 3.0);
        media.expect_first_buffered_end().returning(|| None);
        state.on_time_update(&media);

        assert_eq!(state.loaded_percentage(), 0.0);
    }

    #[test]
    fn progress_without_ranges_keeps_previous_buffer() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media.expect_first_buffered_end().returning(|| Some(30.0));
        state.on_progress(&media);

        let mut empty = MockMediaElement::new();
        empty.expect_first_buffered_end().returning(|| None);
        state.on_progress(&empty);

        assert_eq!(state.buffered_end(), 30.0);
    }

    #[test]
    fn zero_duration_never_divides() {
        let mut state = PlaybackState::default();
        let mut media = MockMediaElement::new();
        media.expect_first_buffered_end().returning(|| Some(25.0));
        state.on_progress(&media);

        assert_eq!(state.duration(), 0.0);
        assert_eq!(state.loaded_percentage(), 0.0);
    }

    #[test]
    fn unknown_durations_read_as_zero() {
        assert_eq!(state_with_duration(f64::NAN).duration(), 0.0);
        assert_eq!(state_with_duration(f64::INFINITY).duration(), 0.0);
        assert_eq!(state_with_duration(-3.0).duration(), 0.0);
    }

    #[test]
    fn metadata_reapplies_speed() {
        let mut state = PlaybackState::default();
        let mut setup = MockMediaElement::new();
        setup.expect_set_playback_rate().return_const(());
        state.increase_speed(&setup);

        let mut media = MockMediaElement::new();
        media.expect_duration().returning(|| 60.0);
        media
            .expect_set_playback_rate()
            .with(eq(1.25))
            .times(1)
            .return_const(());
        state.on_metadata_loaded(&media);

        assert_eq!(state.duration(), 60.0);
    }

    #[test]
    fn clicking_halfway_seeks_to_middle() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media
            .expect_set_current_time()
            .with(eq(50.0))
            .times(1)
            .return_const(());

        assert_eq!(state.seek_to_fraction(&media, 0.5), Some(50.0));
        assert_eq!(state.current_time(), 50.0);
    }

    #[test]
    fn seek_is_ignored_before_metadata() {
        let mut state = PlaybackState::default();
        let mut media = MockMediaElement::new();
        media.expect_set_current_time().never();

        assert_eq!(state.seek_to_fraction(&media, 0.5), None);
    }

    #[test]
    fn seek_fraction_is_clamped() {
        let mut state = state_with_duration(80.0);
        let mut media = MockMediaElement::new();
        media.expect_set_current_time().return_const(());

        assert_eq!(state.seek_to_fraction(&media, 1.7), Some(80.0));
        assert_eq!(state.seek_to_fraction(&media, -0.2), Some(0.0));
    }

    #[test]
    fn skip_backward_floors_at_zero() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 3.0);
        media
            .expect_set_current_time()
            .with(eq(0.0))
            .times(1)
            .return_const(());

        assert_eq!(state.skip_backward(&media), 0.0);
    }

    #[test]
    fn skip_forward_caps_at_duration() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 97.0);
        media
            .expect_set_current_time()
            .with(eq(100.0))
            .times(1)
            .return_const(());

        assert_eq!(state.skip_forward(&media), 100.0);
    }

    #[test]
    fn skips_move_five_seconds() {
        let mut state = state_with_duration(100.0);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 40.0);
        media.expect_set_current_time().return_const(());

        assert_eq!(state.skip_forward(&media), 45.0);
        assert_eq!(state.skip_backward(&media), 35.0);
    }

    #[test]
    fn live_stream_skips_have_no_ceiling() {
        let mut state = state_with_duration(f64::INFINITY);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 120.0);
        media.expect_set_current_time().return_const(());

        assert_eq!(state.skip_forward(&media), 125.0);
        assert_eq!(state.skip_backward(&media), 115.0);
    }

    #[test]
    fn skips_before_metadata_keep_position() {
        let mut state = state_with_duration(f64::NAN);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 12.0);
        media.expect_set_current_time().return_const(());

        assert_eq!(state.skip_forward(&media), 17.0);
        assert_eq!(state.skip_backward(&media), 7.0);
    }

    #[test]
    fn unbounded_skip_backward_still_floors_at_zero() {
        let mut state = state_with_duration(f64::INFINITY);
        let mut media = MockMediaElement::new();
        media.expect_current_time().returning(|| 2.0);
        media
            .expect_set_current_time()
            .with(eq(0.0))
            .times(1)
            .return_const(());

        assert_eq!(state.skip_backward(&media), 0.0);
    }

    #[test]
    fn speed_walks_up_to_two_and_stops() {
        let mut state = PlaybackState::default();
        let mut media = MockMediaElement::new();
        let mut seq = Sequence::new();
        for rate in [1.25, 1.5, 1.75, 2.0] {
            media
                .expect_set_playback_rate()
                .with(eq(rate))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        assert!(state.increase_speed(&media));
        assert!(state.increase_speed(&media));
        assert!(state.increase_speed(&media));
        assert_eq!(state.speed().rate(), 1.75);
        assert!(state.increase_speed(&media));
        assert_eq!(state.speed().rate(), 2.0);
        assert!(!state.increase_speed(&media));
        assert_eq!(state.speed().rate(), 2.0);
    }

    #[test]
    fn speed_never_drops_below_a_quarter() {
        let mut state = PlaybackState::default();
        let mut media = MockMediaElement::new();
        media.expect_set_playback_rate().times(3).return_const(());

        for _ in 0..10 {
            state.decrease_speed(&media);
            let rate = state.speed().rate();
            assert!((0.25..=2.0).contains(&rate));
        }
        assert_eq!(state.speed().rate(), 0.25);
    }
}
