//! Landing section: headline, tagline and calls to action rise in once,
//! while gradient orbs drift forever behind them.

use leptos::{html, prelude::*};

use super::content::{OWNER_NAME, OWNER_ROLE};
use super::effects::{scroll_to_section, target_of, use_ambient, use_reveal};
use crate::motion::{presets, AmbientTrack, LoopTween, StepBinding, TriggerOptions};

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let backdrop_ref = NodeRef::<html::Div>::new();
    let heading_ref = NodeRef::<html::H1>::new();
    let tagline_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();
    let orb_refs = [
        NodeRef::<html::Div>::new(),
        NodeRef::<html::Div>::new(),
        NodeRef::<html::Div>::new(),
    ];

    // The hero plays once on load and never reverses; reversing the landing
    // section when scrolling back up reads as a glitch, not an effect.
    let _ = use_reveal(
        target_of(section_ref),
        vec![target_of(backdrop_ref)],
        TriggerOptions::at(0.1).once(),
        vec![StepBinding::new(presets::settle_in(1600.0), vec![0])],
    );
    let _ = use_reveal(
        target_of(section_ref),
        vec![
            target_of(heading_ref),
            target_of(tagline_ref),
            target_of(cta_ref),
        ],
        TriggerOptions::at(0.1).once(),
        vec![StepBinding::new(
            presets::fade_up(50.0, 1000.0, 300.0),
            vec![0, 1, 2],
        )],
    );

    for (index, orb) in orb_refs.into_iter().enumerate() {
        let i = index as f64;
        use_ambient(
            target_of(orb),
            vec![
                LoopTween::new(AmbientTrack::TranslateX, -16.0, 16.0, 3000.0 + 600.0 * i)
                    .with_delay(200.0 * i),
            ],
        );
    }

    view! {
        <section
            node_ref=section_ref
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div node_ref=backdrop_ref class="absolute inset-0 -z-10">
                <div
                    node_ref=orb_refs[0]
                    class="floating-orb top-1/4 left-1/5 w-72 h-72 bg-cyan-500/20"
                ></div>
                <div
                    node_ref=orb_refs[1]
                    class="floating-orb top-1/2 right-1/4 w-96 h-96 bg-purple-500/20"
                ></div>
                <div
                    node_ref=orb_refs[2]
                    class="floating-orb bottom-1/4 left-1/3 w-64 h-64 bg-blue-500/20"
                ></div>
            </div>
            <div class="text-center px-4">
                <h1
                    node_ref=heading_ref
                    class="text-5xl md:text-7xl font-bold gradient-text"
                    style="opacity: 0"
                >
                    {OWNER_NAME}
                </h1>
                <p
                    node_ref=tagline_ref
                    class="mt-4 text-xl md:text-2xl text-slate-300"
                    style="opacity: 0"
                >
                    {OWNER_ROLE}
                    " crafting immersive experiences for the modern web"
                </p>
                <div
                    node_ref=cta_ref
                    class="mt-10 flex flex-wrap items-center justify-center gap-4"
                    style="opacity: 0"
                >
                    <button
                        class="glow px-8 py-3 rounded-full bg-cyan-500 text-slate-950 font-semibold"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View Projects"
                    </button>
                    <button
                        class="px-8 py-3 rounded-full border border-slate-600 hover:border-cyan-400 transition-colors"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}
