mod about;
mod achievements;
mod contact;
mod content;
mod effects;
mod footer;
mod hero;
mod navigation;
mod preloader;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::gate::LoadGate;

use about::About;
use achievements::Achievements;
use contact::Contact;
use content::OWNER_NAME;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use preloader::Preloader;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/@phosphor-icons/web@2.1.1/src/regular/style.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans bg-slate-950 text-slate-100 overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One animation clock for the whole page. Every registration, one-shot
    // and ambient loop hangs off this context; a single rAF loop drives it.
    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

        let motion = effects::PageMotion::new();
        provide_context(motion.clone());
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            motion.tick(args.delta);
        });
    }

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let gate = RwSignal::new(LoadGate::new());
    let on_loaded = Callback::new(move |_: ()| {
        gate.update(|g| {
            g.complete();
        });
    });

    // The document must not scroll while the splash screen owns it.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        effects::lock_body_scroll(!gate.get().is_complete());
    });

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || gate.get().is_complete()
            fallback=move || view! { <Preloader on_complete=on_loaded /> }
        >
            <MainContent />
        </Show>
    }
}

/// Everything behind the load gate. Fades in as one block the moment the
/// gate flips, then each section animates itself on scroll.
#[component]
fn MainContent() -> impl IntoView {
    use leptos::html;

    let root_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    if let Some(motion) = use_context::<effects::PageMotion>() {
        use crate::motion::{presets, StepBinding};

        let played = StoredValue::new(false);
        Effect::new(move |_| {
            if played.get_value() {
                return;
            }
            let Some(root) = root_ref.get() else {
                return;
            };
            played.set_value(true);
            let steps = vec![StepBinding::new(presets::fade_in(1000.0), vec![0])];
            if let Err(err) = motion.play_once(steps, vec![Some(root.into())], None) {
                log::error!("main content fade-in failed to start: {err}");
            }
        });
    }

    view! {
        <div node_ref=root_ref>
            <Navigation />
            <main>
                <Hero />
                <About />
                <Projects />
                <Achievements />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
