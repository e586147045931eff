//! Projects gallery: the heading rises first, then the cards climb in with a
//! stagger. Scrolling away reverses the whole sequence.

use leptos::{html, prelude::*};

use super::content::PROJECTS;
use super::effects::{target_of, use_reveal, TargetRef};
use crate::motion::{presets, StepBinding, TargetId, TriggerOptions};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let card_refs: Vec<NodeRef<html::Div>> = PROJECTS.iter().map(|_| NodeRef::new()).collect();

    let mut targets: Vec<TargetRef> = vec![target_of(heading_ref)];
    targets.extend(card_refs.iter().copied().map(target_of));
    let card_targets: Vec<TargetId> = (1..1 + PROJECTS.len()).collect();

    let _ = use_reveal(
        target_of(section_ref),
        targets,
        TriggerOptions::default(),
        vec![
            StepBinding::new(presets::fade_up(50.0, 800.0, 0.0), vec![0]),
            StepBinding::new(presets::rise_in(800.0, 200.0), card_targets),
        ],
    );

    view! {
        <section node_ref=section_ref id="projects" class="py-24 px-4 bg-slate-900/40">
            <div class="mx-auto max-w-6xl">
                <h2
                    node_ref=heading_ref
                    class="text-3xl md:text-4xl font-bold text-center gradient-text"
                    style="opacity: 0"
                >
                    "Projects"
                </h2>
                <div class="mt-12 grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .zip(card_refs)
                        .map(|(project, node)| {
                            view! {
                                <div
                                    node_ref=node
                                    class="glass rounded-2xl overflow-hidden hover:-translate-y-1 transition-transform"
                                    style="opacity: 0"
                                >
                                    <img
                                        src=project.image
                                        alt=project.title
                                        loading="lazy"
                                        class="w-full h-44 object-cover"
                                    />
                                    <div class="p-6">
                                        <h3 class="text-lg font-semibold">{project.title}</h3>
                                        <p class="mt-2 text-sm text-slate-400">
                                            {project.description}
                                        </p>
                                        <div class="mt-4 flex flex-wrap gap-2">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-2 py-1 text-xs rounded-full bg-slate-800 text-cyan-300">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a
                                            href=project.link
                                            class="mt-4 inline-block text-sm text-cyan-400 hover:text-cyan-300"
                                        >
                                            "View project →"
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
