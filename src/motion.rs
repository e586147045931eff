//! Entrance-animation engine.
//!
//! The engine is host-agnostic: it knows nothing about the DOM. Targets are
//! opaque indices, time is `f64` milliseconds, and every public operation is
//! driven by the caller (visibility crossings in, style snapshots out). The
//! browser binding lives in `app::effects`.

pub mod ambient;
pub mod easing;
pub mod presets;
pub mod scheduler;
pub mod sequence;

pub use ambient::{AmbientTrack, LoopTween};
pub use easing::Easing;
pub use scheduler::{Scheduler, TriggerHandle};
pub use sequence::{Sequence, SequencePlayer};

use thiserror::Error;

/// Index of an animated element within a single registration.
///
/// The binding layer owns the mapping from `TargetId` to an actual element;
/// a target that resolves to nothing is skipped, never an error.
pub type TargetId = usize;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("animation step duration must be positive, got {0}ms")]
    NonPositiveDuration(f64),
    #[error("from-state and to-state animate different property sets")]
    MismatchedStates,
    #[error("a registration needs at least one animation step")]
    EmptySequence,
}

/// Snapshot of the visual properties a step may animate.
///
/// Every track is optional; a step only touches the tracks it sets on both
/// ends. Translations are px, rotation is degrees, blur is px, width is a
/// percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub blur: Option<f64>,
    pub width_pct: Option<f64>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(px);
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur = Some(px);
        self
    }

    pub fn width_pct(mut self, percent: f64) -> Self {
        self.width_pct = Some(percent);
        self
    }

    /// True when `other` populates exactly the same tracks.
    pub fn same_tracks(&self, other: &Self) -> bool {
        self.opacity.is_some() == other.opacity.is_some()
            && self.x.is_some() == other.x.is_some()
            && self.y.is_some() == other.y.is_some()
            && self.scale.is_some() == other.scale.is_some()
            && self.rotation.is_some() == other.rotation.is_some()
            && self.blur.is_some() == other.blur.is_some()
            && self.width_pct.is_some() == other.width_pct.is_some()
    }

    /// Interpolate towards `to` by eased fraction `t` over the shared tracks.
    ///
    /// `t` may land outside `[0, 1]` for overshooting eases; tracks
    /// extrapolate linearly, which is the intended overshoot.
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        fn mix(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a + (b - a) * t),
                _ => None,
            }
        }
        Self {
            opacity: mix(self.opacity, to.opacity, t),
            x: mix(self.x, to.x, t),
            y: mix(self.y, to.y, t),
            scale: mix(self.scale, to.scale, t),
            rotation: mix(self.rotation, to.rotation, t),
            blur: mix(self.blur, to.blur, t),
            width_pct: mix(self.width_pct, to.width_pct, t),
        }
    }

    /// Overlay the populated tracks of `other` onto `self`.
    pub fn merge_from(&mut self, other: &Self) {
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.x.is_some() {
            self.x = other.x;
        }
        if other.y.is_some() {
            self.y = other.y;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        if other.blur.is_some() {
            self.blur = other.blur;
        }
        if other.width_pct.is_some() {
            self.width_pct = other.width_pct;
        }
    }
}

/// A described transition between two visual snapshots over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Per-sibling delay within the step: sibling `i` starts at
    /// `i * stagger_ms` after the step begins.
    pub stagger_ms: f64,
}

impl AnimationStep {
    pub fn new(
        from: VisualState,
        to: VisualState,
        duration_ms: f64,
        easing: Easing,
    ) -> Result<Self, MotionError> {
        if !(duration_ms > 0.0) {
            return Err(MotionError::NonPositiveDuration(duration_ms));
        }
        if !from.same_tracks(&to) {
            return Err(MotionError::MismatchedStates);
        }
        Ok(Self {
            from,
            to,
            duration_ms,
            easing,
            stagger_ms: 0.0,
        })
    }

    pub fn with_stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms.max(0.0);
        self
    }
}

/// A step bound to the sibling targets it animates.
#[derive(Debug, Clone, PartialEq)]
pub struct StepBinding {
    pub step: AnimationStep,
    pub targets: Vec<TargetId>,
}

impl StepBinding {
    pub fn new(step: AnimationStep, targets: Vec<TargetId>) -> Self {
        Self { step, targets }
    }
}

/// What happens when a trigger's element leaves the viewport again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Play forward on the first entry, then never again.
    PlayOnce,
    /// Play forward on entry, reverse on exit, forward again on re-entry.
    PlayAndReverse,
}

/// Per-trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerOptions {
    /// Fraction of the trigger element that must be visible to count as
    /// entered.
    pub enter_threshold: f64,
    pub replay: ReplayPolicy,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            enter_threshold: 0.2,
            replay: ReplayPolicy::PlayAndReverse,
        }
    }
}

impl TriggerOptions {
    pub fn at(enter_threshold: f64) -> Self {
        Self {
            enter_threshold,
            ..Self::default()
        }
    }

    pub fn once(mut self) -> Self {
        self.replay = ReplayPolicy::PlayOnce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_rejects_mismatched_states() {
        let from = VisualState::new().opacity(0.0).y(50.0);
        let to = VisualState::new().opacity(1.0);
        assert_eq!(
            AnimationStep::new(from, to, 800.0, Easing::QuadOut),
            Err(MotionError::MismatchedStates)
        );
    }

    #[test]
    fn step_rejects_non_positive_duration() {
        let state = VisualState::new().opacity(0.0);
        assert_eq!(
            AnimationStep::new(state, state.opacity(1.0), 0.0, Easing::Linear),
            Err(MotionError::NonPositiveDuration(0.0))
        );
    }

    #[test]
    fn lerp_covers_only_shared_tracks() {
        let from = VisualState::new().opacity(0.0).y(50.0);
        let to = VisualState::new().opacity(1.0).y(0.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(25.0));
        assert_eq!(mid.scale, None);
    }

    #[test]
    fn merge_overlays_populated_tracks() {
        let mut base = VisualState::new().opacity(0.3).y(10.0);
        base.merge_from(&VisualState::new().opacity(1.0).scale(0.9));
        assert_eq!(base.opacity, Some(1.0));
        assert_eq!(base.y, Some(10.0));
        assert_eq!(base.scale, Some(0.9));
    }
}
