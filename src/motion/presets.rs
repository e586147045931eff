//! Shared entrance vocabulary. Every section draws from this table instead
//! of hand-rolling its own timeline parameters.

use super::{AnimationStep, Easing, VisualState};

/// Rise from below while unblurring: headings, copy blocks, the footer.
pub fn fade_up(rise_px: f64, duration_ms: f64, stagger_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0).y(rise_px).blur(10.0),
        VisualState::new().opacity(1.0).y(0.0).blur(0.0),
        duration_ms,
        Easing::QuadOut,
    )
    .expect("fade-up preset should be well-formed")
    .with_stagger(stagger_ms)
}

/// Cards climbing in from below while growing to full size.
pub fn rise_in(duration_ms: f64, stagger_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0).y(100.0).scale(0.8),
        VisualState::new().opacity(1.0).y(0.0).scale(1.0),
        duration_ms,
        Easing::QuadOut,
    )
    .expect("rise-in preset should be well-formed")
    .with_stagger(stagger_ms)
}

/// Icons spinning up from nothing with an overshooting settle.
pub fn spin_pop(duration_ms: f64, stagger_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0).scale(0.0).rotation(-180.0),
        VisualState::new().opacity(1.0).scale(1.0).rotation(0.0),
        duration_ms,
        Easing::BackOut(1.7),
    )
    .expect("spin-pop preset should be well-formed")
    .with_stagger(stagger_ms)
}

/// Achievement cards: a slight tilt that rights itself on the way in.
pub fn tilt_pop(duration_ms: f64, stagger_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new()
            .opacity(0.0)
            .y(80.0)
            .scale(0.8)
            .rotation(-5.0),
        VisualState::new()
            .opacity(1.0)
            .y(0.0)
            .scale(1.0)
            .rotation(0.0),
        duration_ms,
        Easing::BackOut(1.7),
    )
    .expect("tilt-pop preset should be well-formed")
    .with_stagger(stagger_ms)
}

/// Form fields sliding in from the left while unblurring.
pub fn slide_in_left(duration_ms: f64, stagger_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0).x(-50.0).blur(10.0),
        VisualState::new().opacity(1.0).x(0.0).blur(0.0),
        duration_ms,
        Easing::QuadOut,
    )
    .expect("slide-in preset should be well-formed")
    .with_stagger(stagger_ms)
}

/// Hero backdrop: a near-imperceptible zoom while fading in.
pub fn settle_in(duration_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0).scale(0.98),
        VisualState::new().opacity(1.0).scale(1.0),
        duration_ms,
        Easing::QuadOut,
    )
    .expect("settle-in preset should be well-formed")
}

/// Simple crossfade, used for the main tree after the load gate flips.
pub fn fade_in(duration_ms: f64) -> AnimationStep {
    AnimationStep::new(
        VisualState::new().opacity(0.0),
        VisualState::new().opacity(1.0),
        duration_ms,
        Easing::QuadOut,
    )
    .expect("fade-in preset should be well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_construct_without_panicking() {
        // Each preset pairs its tracks; a mismatch here would be a bug in the
        // table, not in caller code.
        let _ = fade_up(50.0, 1000.0, 300.0);
        let _ = rise_in(800.0, 200.0);
        let _ = spin_pop(800.0, 100.0);
        let _ = tilt_pop(800.0, 150.0);
        let _ = slide_in_left(800.0, 200.0);
        let _ = settle_in(1600.0);
        let _ = fade_in(1000.0);
    }

    #[test]
    fn fade_up_starts_hidden_below() {
        let step = fade_up(50.0, 1000.0, 0.0);
        assert_eq!(step.from.opacity, Some(0.0));
        assert_eq!(step.from.y, Some(50.0));
        assert_eq!(step.to.blur, Some(0.0));
    }
}
