//! Timeline layout and playback for an ordered set of steps.

use super::{MotionError, StepBinding, TargetId, VisualState};

use std::collections::BTreeMap;

/// Steps laid out back to back on one timeline.
///
/// A step's span is `duration + (targets - 1) * stagger`; the next step
/// starts when the previous span ends. Sampling is a pure function of the
/// playhead position, which is what makes reverse playback free.
#[derive(Debug, Clone)]
pub struct Sequence {
    spans: Vec<Span>,
    total_ms: f64,
}

#[derive(Debug, Clone)]
struct Span {
    binding: StepBinding,
    start_ms: f64,
}

impl Sequence {
    pub fn new(bindings: Vec<StepBinding>) -> Result<Self, MotionError> {
        if bindings.is_empty() {
            return Err(MotionError::EmptySequence);
        }
        let mut spans = Vec::with_capacity(bindings.len());
        let mut start_ms = 0.0;
        for binding in bindings {
            let siblings = binding.targets.len().saturating_sub(1) as f64;
            let span_ms = binding.step.duration_ms + siblings * binding.step.stagger_ms;
            spans.push(Span { binding, start_ms });
            start_ms += span_ms;
        }
        Ok(Self {
            spans,
            total_ms: start_ms,
        })
    }

    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    /// Resolved state of every target at `position_ms`.
    ///
    /// Targets before their window report the step's from-state, targets
    /// past it the to-state; a target shared by several steps gets the
    /// later step's tracks overlaid in step order.
    pub fn sample(&self, position_ms: f64) -> Vec<(TargetId, VisualState)> {
        let mut out: BTreeMap<TargetId, VisualState> = BTreeMap::new();
        for span in &self.spans {
            let step = &span.binding.step;
            for (index, &target) in span.binding.targets.iter().enumerate() {
                let local_start = span.start_ms + index as f64 * step.stagger_ms;
                let t = (position_ms - local_start) / step.duration_ms;
                let state = step.from.lerp(&step.to, step.easing.value_at(t));
                out.entry(target).or_default().merge_from(&state);
            }
        }
        out.into_iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Playhead over a [`Sequence`].
///
/// Flipping direction mid-flight keeps the playhead where it is, so an
/// element that was halfway in animates back out from halfway.
#[derive(Debug, Clone)]
pub struct SequencePlayer {
    sequence: Sequence,
    position_ms: f64,
    direction: Direction,
    playing: bool,
}

impl SequencePlayer {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            position_ms: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position_ms(&self) -> f64 {
        self.position_ms
    }

    pub fn play_forward(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.position_ms < self.sequence.total_ms();
    }

    pub fn play_reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.position_ms > 0.0;
    }

    /// Move the playhead by `delta_ms` in the current direction, clamping at
    /// either end and stopping there.
    pub fn advance(&mut self, delta_ms: f64) {
        if !self.playing {
            return;
        }
        match self.direction {
            Direction::Forward => {
                self.position_ms = (self.position_ms + delta_ms).min(self.sequence.total_ms());
                if self.position_ms >= self.sequence.total_ms() {
                    self.playing = false;
                }
            }
            Direction::Reverse => {
                self.position_ms = (self.position_ms - delta_ms).max(0.0);
                if self.position_ms <= 0.0 {
                    self.playing = false;
                }
            }
        }
    }

    pub fn sample(&self) -> Vec<(TargetId, VisualState)> {
        self.sequence.sample(self.position_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{AnimationStep, Easing};

    fn fade(duration_ms: f64) -> AnimationStep {
        AnimationStep::new(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
            duration_ms,
            Easing::Linear,
        )
        .expect("fade step should be well-formed")
    }

    fn opacity_of(frame: &[(usize, VisualState)], target: usize) -> f64 {
        frame
            .iter()
            .find(|(id, _)| *id == target)
            .and_then(|(_, s)| s.opacity)
            .expect("target should have an opacity track")
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(Sequence::new(vec![]).unwrap_err(), MotionError::EmptySequence);
    }

    #[test]
    fn stagger_extends_the_span() {
        let binding = StepBinding::new(fade(800.0).with_stagger(200.0), vec![0, 1, 2]);
        let seq = Sequence::new(vec![binding]).unwrap();
        assert_eq!(seq.total_ms(), 800.0 + 2.0 * 200.0);
    }

    #[test]
    fn siblings_start_at_linear_offsets() {
        let binding = StepBinding::new(fade(800.0).with_stagger(200.0), vec![0, 1]);
        let seq = Sequence::new(vec![binding]).unwrap();

        // Sibling 1 has not started at its 200ms offset yet.
        let frame = seq.sample(200.0);
        assert_eq!(opacity_of(&frame, 0), 0.25);
        assert_eq!(opacity_of(&frame, 1), 0.0);

        let frame = seq.sample(600.0);
        assert_eq!(opacity_of(&frame, 0), 0.75);
        assert_eq!(opacity_of(&frame, 1), 0.5);
    }

    #[test]
    fn steps_run_in_registration_order() {
        let rise = AnimationStep::new(
            VisualState::new().y(100.0),
            VisualState::new().y(0.0),
            400.0,
            Easing::Linear,
        )
        .unwrap();
        let seq = Sequence::new(vec![
            StepBinding::new(fade(800.0), vec![0]),
            StepBinding::new(rise, vec![1]),
        ])
        .unwrap();

        // During step one, step two's target still sits at its from-state.
        let frame = seq.sample(400.0);
        assert_eq!(opacity_of(&frame, 0), 0.5);
        let y1 = frame.iter().find(|(id, _)| *id == 1).unwrap().1.y;
        assert_eq!(y1, Some(100.0));

        let frame = seq.sample(1000.0);
        let y1 = frame.iter().find(|(id, _)| *id == 1).unwrap().1.y;
        assert_eq!(y1, Some(50.0));
    }

    #[test]
    fn shared_target_merges_tracks_across_steps() {
        let widen = AnimationStep::new(
            VisualState::new().width_pct(0.0),
            VisualState::new().width_pct(100.0),
            1000.0,
            Easing::Linear,
        )
        .unwrap();
        let seq = Sequence::new(vec![
            StepBinding::new(fade(500.0), vec![0]),
            StepBinding::new(widen, vec![0]),
        ])
        .unwrap();

        let frame = seq.sample(1000.0);
        let state = frame[0].1;
        assert_eq!(state.opacity, Some(1.0));
        assert_eq!(state.width_pct, Some(50.0));
    }

    #[test]
    fn player_stops_exactly_at_the_end() {
        let seq = Sequence::new(vec![StepBinding::new(fade(2500.0), vec![0])]).unwrap();
        let mut player = SequencePlayer::new(seq);
        player.play_forward();

        player.advance(2499.0);
        assert!(player.is_playing(), "must not finish before the configured total");
        player.advance(1.0);
        assert!(!player.is_playing());
        assert_eq!(player.position_ms(), 2500.0);
        assert_eq!(opacity_of(&player.sample(), 0), 1.0);
    }

    #[test]
    fn mid_flight_reversal_keeps_the_playhead() {
        let seq = Sequence::new(vec![StepBinding::new(fade(800.0), vec![0])]).unwrap();
        let mut player = SequencePlayer::new(seq);
        player.play_forward();
        player.advance(600.0);
        assert_eq!(opacity_of(&player.sample(), 0), 0.75);

        player.play_reverse();
        assert_eq!(player.position_ms(), 600.0);
        player.advance(200.0);
        assert_eq!(opacity_of(&player.sample(), 0), 0.5);
        player.advance(1000.0);
        assert!(!player.is_playing());
        assert_eq!(opacity_of(&player.sample(), 0), 0.0);
    }
}
