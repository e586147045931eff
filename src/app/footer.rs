//! Footer: rises in when reached, with a few particles bobbing behind it.

use leptos::{html, prelude::*};

use super::content::{OWNER_NAME, SOCIAL_LINKS};
use super::effects::{target_of, use_ambient, use_reveal};
use crate::motion::{presets, AmbientTrack, LoopTween, StepBinding, TriggerOptions};

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let particle_refs = [
        NodeRef::<html::Div>::new(),
        NodeRef::<html::Div>::new(),
        NodeRef::<html::Div>::new(),
    ];

    let _ = use_reveal(
        target_of(footer_ref),
        vec![target_of(content_ref)],
        TriggerOptions::at(0.1),
        vec![StepBinding::new(presets::fade_up(60.0, 1000.0, 0.0), vec![0])],
    );

    for (index, particle) in particle_refs.into_iter().enumerate() {
        let i = index as f64;
        use_ambient(
            target_of(particle),
            vec![
                LoopTween::new(AmbientTrack::TranslateY, 0.0, -30.0, 4000.0 + 500.0 * i),
                LoopTween::new(AmbientTrack::TranslateX, 0.0, 20.0, 6000.0 + 300.0 * i),
            ],
        );
    }

    view! {
        <footer node_ref=footer_ref class="relative py-16 px-4 overflow-hidden">
            <div class="absolute inset-0 -z-10">
                <div node_ref=particle_refs[0] class="particle top-8 left-1/4"></div>
                <div node_ref=particle_refs[1] class="particle top-16 left-1/2"></div>
                <div node_ref=particle_refs[2] class="particle top-6 right-1/4"></div>
            </div>
            <div node_ref=content_ref class="mx-auto max-w-6xl text-center" style="opacity: 0">
                <p class="text-lg font-semibold gradient-text">{OWNER_NAME}</p>
                <div class="mt-4 flex items-center justify-center gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    class="text-slate-400 hover:text-cyan-400 transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="mt-6 text-xs text-slate-500">
                    "© 2026 " {OWNER_NAME} ". Built " {env!("BUILD_TIME")}
                </p>
            </div>
        </footer>
    }
}
