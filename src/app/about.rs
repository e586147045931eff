//! About section: portrait and bio rise in together, then the skill tiles
//! spin up one after another.

use leptos::{html, prelude::*};

use super::content::{OWNER_NAME, OWNER_ROLE, SKILLS};
use super::effects::{target_of, use_reveal, TargetRef};
use crate::motion::{presets, StepBinding, TargetId, TriggerOptions};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let portrait_ref = NodeRef::<html::Div>::new();
    let bio_ref = NodeRef::<html::Div>::new();
    let skill_refs: Vec<NodeRef<html::Div>> = SKILLS.iter().map(|_| NodeRef::new()).collect();

    let mut targets: Vec<TargetRef> = vec![target_of(portrait_ref), target_of(bio_ref)];
    targets.extend(skill_refs.iter().copied().map(target_of));
    let skill_targets: Vec<TargetId> = (2..2 + SKILLS.len()).collect();

    let _ = use_reveal(
        target_of(section_ref),
        targets,
        TriggerOptions::default(),
        vec![
            StepBinding::new(presets::fade_up(50.0, 1000.0, 200.0), vec![0, 1]),
            StepBinding::new(presets::spin_pop(800.0, 100.0), skill_targets),
        ],
    );

    view! {
        <section node_ref=section_ref id="about" class="py-24 px-4">
            <div class="mx-auto max-w-6xl">
                <h2 class="text-3xl md:text-4xl font-bold text-center gradient-text">"About Me"</h2>
                <div class="mt-12 grid md:grid-cols-2 gap-12 items-center">
                    <div node_ref=portrait_ref class="flex justify-center" style="opacity: 0">
                        <div class="glass glow rounded-2xl w-64 h-64 flex items-center justify-center">
                            <span class="text-6xl font-bold gradient-text">"VK"</span>
                        </div>
                    </div>
                    <div node_ref=bio_ref style="opacity: 0">
                        <p class="text-lg text-slate-300">
                            "I'm " {OWNER_NAME} ", a " {OWNER_ROLE.to_lowercase()}
                            " who enjoys building interfaces where motion carries meaning. \
                             From full-stack apps to interactive 3D experiments, I care about \
                             the details that make a page feel alive."
                        </p>
                        <p class="mt-4 text-lg text-slate-300">
                            "Currently exploring systems programming and bringing the same \
                             polish to the backend that I expect from the front."
                        </p>
                    </div>
                </div>
                <div class="mt-16 grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-6">
                    {SKILLS
                        .iter()
                        .zip(skill_refs)
                        .map(|(skill, node)| {
                            view! {
                                <div
                                    node_ref=node
                                    class="glass rounded-xl p-6 text-center hover:scale-105 transition-transform"
                                    style="opacity: 0"
                                >
                                    <i class=format!("{} text-4xl {}", skill.icon, skill.color)></i>
                                    <p class="mt-3 text-sm text-slate-300">{skill.name}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
