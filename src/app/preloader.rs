//! Splash screen: brand text and a progress bar play one fixed timeline,
//! then the whole panel fades away and the completion callback flips the
//! load gate.

use leptos::{html, prelude::*};

use super::content::OWNER_NAME;
use super::effects::{target_of, use_ambient};
use crate::motion::{
    AmbientTrack, AnimationStep, Easing, LoopTween, StepBinding, TargetId, VisualState,
};

const TEXT: TargetId = 0;
const BAR: TargetId = 1;
const PANEL: TargetId = 2;

/// The splash timeline, laid out back to back:
/// text and bar rise in, the bar fills, both lift away, the panel fades.
fn splash_sequence() -> Vec<StepBinding> {
    // Opacity and lift only; the splash text never blurs.
    let reveal = AnimationStep::new(
        VisualState::new().opacity(0.0).y(30.0),
        VisualState::new().opacity(1.0).y(0.0),
        800.0,
        Easing::QuadOut,
    )
    .expect("reveal step should be well-formed")
    .with_stagger(200.0);
    let fill = AnimationStep::new(
        VisualState::new().width_pct(0.0),
        VisualState::new().width_pct(100.0),
        2500.0,
        Easing::QuadOut,
    )
    .expect("progress fill step should be well-formed");
    let lift = AnimationStep::new(
        VisualState::new().opacity(1.0).y(0.0),
        VisualState::new().opacity(0.0).y(-30.0),
        500.0,
        Easing::QuadIn,
    )
    .expect("lift-away step should be well-formed");
    let dismiss = AnimationStep::new(
        VisualState::new().opacity(1.0).scale(1.0),
        VisualState::new().opacity(0.0).scale(0.9),
        800.0,
        Easing::QuadInOut,
    )
    .expect("panel dismiss step should be well-formed");

    vec![
        StepBinding::new(reveal, vec![TEXT, BAR]),
        StepBinding::new(fill, vec![BAR]),
        StepBinding::new(lift, vec![TEXT, BAR]),
        StepBinding::new(dismiss, vec![PANEL]),
    ]
}

#[component]
pub fn Preloader(on_complete: Callback<()>) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let text_ref = NodeRef::<html::Div>::new();
    let bar_ref = NodeRef::<html::Div>::new();
    let orb_refs = [NodeRef::<html::Div>::new(), NodeRef::<html::Div>::new()];

    for (index, orb) in orb_refs.into_iter().enumerate() {
        let i = index as f64;
        use_ambient(
            target_of(orb),
            vec![
                LoopTween::new(AmbientTrack::TranslateY, -12.0, 12.0, 2600.0 + 800.0 * i)
                    .with_delay(300.0 * i),
            ],
        );
    }

    #[cfg(feature = "hydrate")]
    {
        use super::effects::PageMotion;
        use std::rc::Rc;

        if let Some(motion) = use_context::<PageMotion>() {
            let started = StoredValue::new(false);
            Effect::new(move |_| {
                if started.get_value() {
                    return;
                }
                let (Some(text), Some(bar), Some(panel)) =
                    (text_ref.get(), bar_ref.get(), panel_ref.get())
                else {
                    return;
                };
                started.set_value(true);

                let done: Rc<dyn Fn()> = Rc::new(move || on_complete.run(()));
                let targets = vec![Some(text.into()), Some(bar.into()), Some(panel.into())];
                if let Err(err) = motion.play_once(splash_sequence(), targets, Some(done)) {
                    log::error!("splash timeline failed to start: {err}");
                    on_complete.run(());
                }
            });
        } else {
            log::error!("PageMotion context missing; skipping the splash screen");
            Effect::new(move |_| on_complete.run(()));
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = on_complete;

    view! {
        <div
            node_ref=panel_ref
            class="preloader fixed inset-0 z-50 flex flex-col items-center justify-center bg-slate-950 overflow-hidden"
        >
            <div class="absolute inset-0 -z-10">
                <div
                    node_ref=orb_refs[0]
                    class="floating-orb top-1/3 left-1/4 w-64 h-64 bg-cyan-500/15"
                ></div>
                <div
                    node_ref=orb_refs[1]
                    class="floating-orb bottom-1/3 right-1/4 w-80 h-80 bg-purple-500/15"
                ></div>
            </div>
            <div node_ref=text_ref class="text-center" style="opacity: 0">
                <h1 class="text-4xl md:text-5xl font-bold gradient-text">{OWNER_NAME}</h1>
                <p class="mt-3 text-xs tracking-[0.4em] uppercase text-slate-400">
                    "Loading portfolio"
                </p>
            </div>
            <div class="mt-8 w-64 h-1 rounded-full bg-slate-800 overflow-hidden">
                <div node_ref=bar_ref class="progress-bar h-full rounded-full" style="width: 0%"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Sequence;

    #[test]
    fn splash_runs_for_the_full_timeline() {
        let seq = Sequence::new(splash_sequence()).expect("splash sequence should be well-formed");
        // 800 + 200 stagger, 2500 fill, 500 lift, 800 dismiss.
        assert_eq!(seq.total_ms(), 4800.0);
    }

    #[test]
    fn bar_starts_empty_and_hidden() {
        let seq = Sequence::new(splash_sequence()).expect("splash sequence should be well-formed");
        let frame = seq.sample(0.0);
        let bar = frame
            .iter()
            .find(|(id, _)| *id == BAR)
            .map(|(_, state)| *state)
            .expect("bar should be animated");
        assert_eq!(bar.width_pct, Some(0.0));
        assert_eq!(bar.opacity, Some(0.0));
    }

    #[test]
    fn reveal_keeps_the_text_sharp() {
        let seq = Sequence::new(splash_sequence()).expect("splash sequence should be well-formed");
        let frame = seq.sample(0.0);
        let text = frame
            .iter()
            .find(|(id, _)| *id == TEXT)
            .map(|(_, state)| *state)
            .expect("text should be animated");
        assert_eq!(text.blur, None);
        assert_eq!(text.opacity, Some(0.0));
        assert_eq!(text.y, Some(30.0));
    }

    #[test]
    fn panel_is_gone_at_the_end() {
        let seq = Sequence::new(splash_sequence()).expect("splash sequence should be well-formed");
        let frame = seq.sample(seq.total_ms());
        let panel = frame
            .iter()
            .find(|(id, _)| *id == PANEL)
            .map(|(_, state)| *state)
            .expect("panel should be animated");
        assert_eq!(panel.opacity, Some(0.0));
        assert_eq!(panel.scale, Some(0.9));
    }
}
