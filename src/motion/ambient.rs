//! Always-on looping tweens for decorative motion (floating orbs, footer
//! particles). Deliberately separate from the visibility scheduler: ambient
//! motion never starts, reverses or stops with scrolling.

use super::{Easing, VisualState};

/// Which single track a loop tween drives. Several tweens may stack on one
/// element; each owns a distinct track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientTrack {
    TranslateX,
    TranslateY,
    Scale,
    Opacity,
}

/// A ping-pong tween that runs forever: `from` → `to` over `duration_ms`,
/// then back, with each return leg replaying the ease backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopTween {
    pub track: AmbientTrack,
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub delay_ms: f64,
}

impl LoopTween {
    pub fn new(track: AmbientTrack, from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            track,
            from,
            to,
            duration_ms,
            easing: Easing::SineInOut,
            delay_ms: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Value of the driven track `elapsed_ms` after the tween was attached.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.from;
        }
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return self.from;
        }
        let phase = (local / self.duration_ms) % 2.0;
        let leg = if phase < 1.0 { phase } else { 2.0 - phase };
        self.from + (self.to - self.from) * self.easing.value_at(leg)
    }

    /// Write the current value into `state` on this tween's track.
    pub fn apply_to(&self, state: &mut VisualState, elapsed_ms: f64) {
        let value = self.value_at(elapsed_ms);
        match self.track {
            AmbientTrack::TranslateX => state.x = Some(value),
            AmbientTrack::TranslateY => state.y = Some(value),
            AmbientTrack::Scale => state.scale = Some(value),
            AmbientTrack::Opacity => state.opacity = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_pong_returns_to_the_start() {
        let tween =
            LoopTween::new(AmbientTrack::TranslateX, 0.0, 16.0, 3000.0).with_easing(Easing::Linear);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(3000.0), 16.0);
        assert_eq!(tween.value_at(4500.0), 8.0);
        assert_eq!(tween.value_at(6000.0), 0.0);
        // And keeps cycling.
        assert_eq!(tween.value_at(9000.0), 16.0);
    }

    #[test]
    fn delay_holds_the_start_value() {
        let tween = LoopTween::new(AmbientTrack::TranslateY, -30.0, 0.0, 4000.0)
            .with_easing(Easing::Linear)
            .with_delay(300.0);
        assert_eq!(tween.value_at(0.0), -30.0);
        assert_eq!(tween.value_at(300.0), -30.0);
        assert_eq!(tween.value_at(2300.0), -15.0);
    }

    #[test]
    fn stacked_tweens_compose_one_state() {
        let bob = LoopTween::new(AmbientTrack::TranslateY, 0.0, -30.0, 4000.0)
            .with_easing(Easing::Linear);
        let drift = LoopTween::new(AmbientTrack::TranslateX, 0.0, 20.0, 6000.0)
            .with_easing(Easing::Linear);

        let mut state = VisualState::new();
        bob.apply_to(&mut state, 2000.0);
        drift.apply_to(&mut state, 3000.0);
        assert_eq!(state.y, Some(-15.0));
        assert_eq!(state.x, Some(10.0));
        assert_eq!(state.opacity, None);
    }

    #[test]
    fn zero_duration_degrades_to_the_start_value() {
        let tween = LoopTween::new(AmbientTrack::Scale, 1.0, 2.0, 0.0);
        assert_eq!(tween.value_at(500.0), 1.0);
    }
}
