//! Contact form and social links. Fields slide in from the left; the form
//! itself only validates and logs locally, there is no submission backend.

use leptos::{html, prelude::*};

use super::content::SOCIAL_LINKS;
use super::effects::{target_of, use_reveal, TargetRef};
use crate::motion::{presets, StepBinding, TargetId, TriggerOptions};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let name_row = NodeRef::<html::Div>::new();
    let email_row = NodeRef::<html::Div>::new();
    let message_row = NodeRef::<html::Div>::new();
    let submit_row = NodeRef::<html::Div>::new();
    let social_refs: Vec<NodeRef<html::A>> = SOCIAL_LINKS.iter().map(|_| NodeRef::new()).collect();

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (sent, set_sent) = signal(false);

    let mut targets: Vec<TargetRef> = vec![
        target_of(heading_ref),
        target_of(name_row),
        target_of(email_row),
        target_of(message_row),
        target_of(submit_row),
    ];
    targets.extend(social_refs.iter().copied().map(target_of));
    let social_targets: Vec<TargetId> = (5..5 + SOCIAL_LINKS.len()).collect();

    let _ = use_reveal(
        target_of(section_ref),
        targets,
        TriggerOptions::default(),
        vec![
            StepBinding::new(presets::fade_up(50.0, 800.0, 0.0), vec![0]),
            StepBinding::new(presets::slide_in_left(800.0, 200.0), vec![1, 2, 3, 4]),
            StepBinding::new(presets::spin_pop(600.0, 100.0), social_targets),
        ],
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        log::info!(
            "contact request from {} <{}> ({} chars)",
            name.value(),
            email.value(),
            message.value().len()
        );
        name.set_value("");
        email.set_value("");
        message.set_value("");
        set_sent(true);
    };

    view! {
        <section node_ref=section_ref id="contact" class="py-24 px-4 bg-slate-900/40">
            <div class="mx-auto max-w-3xl">
                <h2
                    node_ref=heading_ref
                    class="text-3xl md:text-4xl font-bold text-center gradient-text"
                    style="opacity: 0"
                >
                    "Get In Touch"
                </h2>
                <form class="mt-12 space-y-6" on:submit=on_submit>
                    <div node_ref=name_row style="opacity: 0">
                        <label class="block text-sm text-slate-400" for="contact-name">
                            "Name"
                        </label>
                        <input
                            node_ref=name_ref
                            id="contact-name"
                            type="text"
                            required
                            class="mt-1 w-full px-4 py-3 rounded-lg glass focus:outline-none focus:ring-2 focus:ring-cyan-500"
                        />
                    </div>
                    <div node_ref=email_row style="opacity: 0">
                        <label class="block text-sm text-slate-400" for="contact-email">
                            "Email"
                        </label>
                        <input
                            node_ref=email_ref
                            id="contact-email"
                            type="email"
                            required
                            class="mt-1 w-full px-4 py-3 rounded-lg glass focus:outline-none focus:ring-2 focus:ring-cyan-500"
                        />
                    </div>
                    <div node_ref=message_row style="opacity: 0">
                        <label class="block text-sm text-slate-400" for="contact-message">
                            "Message"
                        </label>
                        <textarea
                            node_ref=message_ref
                            id="contact-message"
                            rows="5"
                            required
                            class="mt-1 w-full px-4 py-3 rounded-lg glass focus:outline-none focus:ring-2 focus:ring-cyan-500"
                        ></textarea>
                    </div>
                    <div node_ref=submit_row style="opacity: 0">
                        <button
                            type="submit"
                            class="glow w-full px-8 py-3 rounded-full bg-cyan-500 text-slate-950 font-semibold"
                        >
                            "Send Message"
                        </button>
                        <Show when=move || sent()>
                            <p class="mt-3 text-center text-sm text-green-400">
                                "Thanks! I'll get back to you soon."
                            </p>
                        </Show>
                    </div>
                </form>
                <div class="mt-12 flex items-center justify-center gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .zip(social_refs)
                        .map(|(link, node)| {
                            view! {
                                <a
                                    node_ref=node
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=link.label
                                    class="glass rounded-full w-12 h-12 flex items-center justify-center hover:scale-110 transition-transform"
                                    style="opacity: 0"
                                >
                                    <i class=format!("{} text-xl", link.icon)></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
