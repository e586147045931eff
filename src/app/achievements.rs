//! Achievements: tilted cards right themselves on entry, and the numeric
//! cards count up from zero the first time the section is seen.

use leptos::{html, prelude::*};

use super::content::ACHIEVEMENTS;
use super::effects::{target_of, use_reveal, TargetRef};
use crate::motion::{presets, StepBinding, TargetId, TriggerOptions};

/// How long a counter takes to reach its target.
const COUNT_MS: f64 = 2000.0;

#[component]
pub fn Achievements() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let card_refs: Vec<NodeRef<html::Div>> = ACHIEVEMENTS.iter().map(|_| NodeRef::new()).collect();

    let mut targets: Vec<TargetRef> = vec![target_of(heading_ref)];
    targets.extend(card_refs.iter().copied().map(target_of));
    let card_targets: Vec<TargetId> = (1..1 + ACHIEVEMENTS.len()).collect();

    let entered = use_reveal(
        target_of(section_ref),
        targets,
        TriggerOptions::default(),
        vec![
            StepBinding::new(presets::fade_up(50.0, 800.0, 0.0), vec![0]),
            StepBinding::new(presets::tilt_pop(800.0, 150.0), card_targets),
        ],
    );

    view! {
        <section node_ref=section_ref id="achievements" class="py-24 px-4">
            <div class="mx-auto max-w-6xl">
                <h2
                    node_ref=heading_ref
                    class="text-3xl md:text-4xl font-bold text-center gradient-text"
                    style="opacity: 0"
                >
                    "Achievements"
                </h2>
                <div class="mt-12 grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {ACHIEVEMENTS
                        .iter()
                        .zip(card_refs)
                        .map(|(achievement, node)| {
                            let accent = format!("glass rounded-2xl p-6 {}", achievement.accent);
                            view! {
                                <div node_ref=node class=accent style="opacity: 0">
                                    <i class=format!("{} text-3xl text-cyan-400", achievement.icon)></i>
                                    <h3 class="mt-4 text-lg font-semibold">
                                        {match &achievement.counter {
                                            Some(counter) => {
                                                view! {
                                                    <CountUp
                                                        entered
                                                        target=counter.target
                                                        suffix=counter.suffix
                                                    />
                                                }
                                                    .into_any()
                                            }
                                            None => view! { {achievement.title} }.into_any(),
                                        }}
                                    </h3>
                                    <p class="mt-2 text-sm text-slate-400">
                                        {achievement.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Counts from zero to `target` over [`COUNT_MS`], decelerating near the end.
/// The clock only starts once the section has actually entered the viewport.
#[component]
fn CountUp(entered: ReadSignal<bool>, target: u32, suffix: &'static str) -> impl IntoView {
    let (value, set_value) = signal(0u32);

    #[cfg(feature = "hydrate")]
    {
        use crate::motion::Easing;
        use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs,
                         UseRafFnOptions};

        let (elapsed, set_elapsed) = signal(0.0f64);
        let Pausable { pause, resume, .. } = use_raf_fn_with_options(
            move |args: UseRafFnCallbackArgs| {
                set_elapsed.update(|e| *e += args.delta);
            },
            UseRafFnOptions::default().immediate(false),
        );

        Effect::new(move |_| {
            let t = (elapsed.get() / COUNT_MS).min(1.0);
            set_value((f64::from(target) * Easing::QuadOut.value_at(t)).round() as u32);
            if t >= 1.0 {
                pause();
            }
        });
        Effect::new(move |_| {
            if entered.get() {
                resume();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (entered, set_value);

    view! { <span>{move || format!("{}{}", value.get(), suffix)}</span> }
}
