//! Visibility-driven scheduler: owns every registered trigger and turns
//! viewport crossings plus frame ticks into style snapshots.

use super::{MotionError, ReplayPolicy, StepBinding, TargetId, TriggerOptions, VisualState};
use super::sequence::{Sequence, SequencePlayer};

use std::collections::BTreeMap;

/// Opaque handle returned by [`Scheduler::register`]; everything tied to the
/// registration is freed by [`Scheduler::unregister`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerHandle(u64);

#[derive(Debug)]
struct Registration {
    options: TriggerOptions,
    player: SequencePlayer,
    visible: bool,
    has_played: bool,
}

/// Per-tick updates for one registration.
pub type Frame = (TriggerHandle, Vec<(TargetId, VisualState)>);

#[derive(Debug, Default)]
pub struct Scheduler {
    registrations: BTreeMap<u64, Registration>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        options: TriggerOptions,
        steps: Vec<StepBinding>,
    ) -> Result<TriggerHandle, MotionError> {
        let sequence = Sequence::new(steps)?;
        let id = self.next_id;
        self.next_id += 1;
        self.registrations.insert(
            id,
            Registration {
                options,
                player: SequencePlayer::new(sequence),
                visible: false,
                has_played: false,
            },
        );
        Ok(TriggerHandle(id))
    }

    /// From-state of every target, for the binding layer to apply up front so
    /// nothing flashes unstyled before its trigger fires.
    pub fn initial_frame(&self, handle: TriggerHandle) -> Vec<(TargetId, VisualState)> {
        self.registrations
            .get(&handle.0)
            .map(|reg| reg.player.sample())
            .unwrap_or_default()
    }

    /// Report a threshold crossing. Repeats of the current state are ignored,
    /// so the same edge can never double-fire.
    pub fn set_visible(&mut self, handle: TriggerHandle, visible: bool) {
        let Some(reg) = self.registrations.get_mut(&handle.0) else {
            log::debug!("visibility change for unregistered trigger {handle:?}");
            return;
        };
        if reg.visible == visible {
            return;
        }
        reg.visible = visible;
        if visible {
            if reg.options.replay == ReplayPolicy::PlayOnce && reg.has_played {
                return;
            }
            reg.player.play_forward();
            reg.has_played = true;
        } else if reg.options.replay == ReplayPolicy::PlayAndReverse && reg.has_played {
            reg.player.play_reverse();
        }
    }

    /// Advance every playing registration by `delta_ms` and collect the
    /// resulting snapshots. The clamped end frame is emitted exactly once;
    /// idle registrations contribute nothing.
    pub fn tick(&mut self, delta_ms: f64) -> Vec<Frame> {
        let mut frames = Vec::new();
        for (&id, reg) in &mut self.registrations {
            if reg.player.is_playing() {
                reg.player.advance(delta_ms);
                frames.push((TriggerHandle(id), reg.player.sample()));
            }
        }
        frames
    }

    /// Drop a registration; any in-flight animation stops producing updates
    /// from this call on. Returns whether the handle was live.
    pub fn unregister(&mut self, handle: TriggerHandle) -> bool {
        self.registrations.remove(&handle.0).is_some()
    }

    pub fn is_idle(&self) -> bool {
        self.registrations
            .values()
            .all(|reg| !reg.player.is_playing())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{AnimationStep, Easing};

    fn fade_binding(duration_ms: f64) -> StepBinding {
        let step = AnimationStep::new(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
            duration_ms,
            Easing::Linear,
        )
        .expect("fade step should be well-formed");
        StepBinding::new(step, vec![0])
    }

    fn opacity(frame: &[(usize, VisualState)]) -> f64 {
        frame[0].1.opacity.expect("opacity track should be present")
    }

    #[test]
    fn targets_hold_from_state_until_entered() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::at(0.8), vec![fade_binding(800.0)])
            .unwrap();

        assert_eq!(opacity(&scheduler.initial_frame(handle)), 0.0);
        // Idempotent under repeated checks, and ticks emit nothing.
        assert_eq!(opacity(&scheduler.initial_frame(handle)), 0.0);
        assert!(scheduler.tick(500.0).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn enter_then_leave_plays_forward_then_reverse() {
        // Threshold 0.8, opacity 0→1 over 800ms, reverse allowed: enter at
        // t=0 reaches 1.0 by t=800; leave at t=1000 is back to 0.0 by t=1800.
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::at(0.8), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        let frame = &scheduler.tick(400.0)[0].1;
        assert_eq!(opacity(frame), 0.5);
        let frame = &scheduler.tick(400.0)[0].1;
        assert_eq!(opacity(frame), 1.0);
        assert!(scheduler.tick(200.0).is_empty(), "finished by t=800");

        scheduler.set_visible(handle, false);
        let frame = &scheduler.tick(400.0)[0].1;
        assert_eq!(opacity(frame), 0.5);
        let frame = &scheduler.tick(400.0)[0].1;
        assert_eq!(opacity(frame), 0.0);
        assert!(scheduler.is_idle());

        // Forward again on re-entry.
        scheduler.set_visible(handle, true);
        let frame = &scheduler.tick(200.0)[0].1;
        assert_eq!(opacity(frame), 0.25);
    }

    #[test]
    fn repeated_enter_reports_do_not_replay() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::at(0.5), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        scheduler.tick(800.0);
        assert!(scheduler.is_idle());

        // Same edge again without leaving: nothing restarts.
        scheduler.set_visible(handle, true);
        assert!(scheduler.tick(100.0).is_empty());
    }

    #[test]
    fn play_once_never_reverses_or_replays() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::at(0.5).once(), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        scheduler.tick(800.0);
        scheduler.set_visible(handle, false);
        assert!(scheduler.tick(100.0).is_empty(), "no reverse under PlayOnce");

        scheduler.set_visible(handle, true);
        assert!(scheduler.tick(100.0).is_empty(), "no replay under PlayOnce");
        assert_eq!(opacity(&scheduler.initial_frame(handle)), 1.0);
    }

    #[test]
    fn unregister_halts_in_flight_animation() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::default(), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        scheduler.tick(400.0);
        assert!(scheduler.unregister(handle));

        // A pending tick after removal must not produce updates.
        assert!(scheduler.tick(100.0).is_empty());
        assert!(!scheduler.unregister(handle));
        // Stale reports are ignored rather than panicking.
        scheduler.set_visible(handle, false);
    }

    #[test]
    fn triggers_are_independent() {
        let mut scheduler = Scheduler::new();
        let a = scheduler
            .register(TriggerOptions::default(), vec![fade_binding(400.0)])
            .unwrap();
        let b = scheduler
            .register(TriggerOptions::default(), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(a, true);
        let frames = scheduler.tick(200.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0, a);

        scheduler.set_visible(b, true);
        let frames = scheduler.tick(200.0);
        assert_eq!(frames.len(), 2);
        assert_eq!(opacity(&frames[0].1), 1.0);
        assert_eq!(opacity(&frames[1].1), 0.25);
    }

    #[test]
    fn rapid_enter_then_leave_applied_in_order_nets_out() {
        // A fast scroll past a short section reports enter and leave before
        // any frame runs; applied oldest-first they must cancel, and the
        // next real entry must still play.
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::default(), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        scheduler.set_visible(handle, false);
        assert!(scheduler.tick(800.0).is_empty(), "the pair is a net no-op");
        assert_eq!(opacity(&scheduler.initial_frame(handle)), 0.0);

        scheduler.set_visible(handle, true);
        let frame = &scheduler.tick(400.0)[0].1;
        assert_eq!(opacity(frame), 0.5);
    }

    #[test]
    fn leaving_mid_animation_reverses_from_the_playhead() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler
            .register(TriggerOptions::default(), vec![fade_binding(800.0)])
            .unwrap();

        scheduler.set_visible(handle, true);
        scheduler.tick(600.0);
        scheduler.set_visible(handle, false);
        let frame = &scheduler.tick(200.0)[0].1;
        assert_eq!(opacity(frame), 0.5);
    }
}
