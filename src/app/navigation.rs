//! Fixed top navigation: transparent over the hero, frosted once the page
//! has scrolled, with a full-screen overlay menu on small screens.

use leptos::prelude::*;

use super::content::{NAV_ITEMS, OWNER_NAME};
use super::effects::scroll_to_section;

#[component]
pub fn Navigation() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::use_window_scroll;

        let (_x, y) = use_window_scroll();
        Effect::new(move |_| set_scrolled(y.get() > 50.0));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    let go = move |section: &'static str| {
        move |_ev: leptos::ev::MouseEvent| {
            set_menu_open(false);
            scroll_to_section(section);
        }
    };

    let nav_class = move || {
        if scrolled() {
            "fixed top-0 inset-x-0 z-40 glass transition-colors duration-300"
        } else {
            "fixed top-0 inset-x-0 z-40 bg-transparent transition-colors duration-300"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="mx-auto max-w-6xl px-4 sm:px-6 py-4 flex items-center justify-between">
                <button class="text-lg font-bold gradient-text" on:click=go("hero")>
                    {OWNER_NAME}
                </button>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="text-sm text-slate-300 hover:text-white transition-colors"
                                    on:click=go(item.section)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class=move || {
                        if menu_open() { "ph ph-x" } else { "ph ph-list" }
                    }></i>
                </button>
            </div>
        </nav>
        <Show when=move || menu_open()>
            <div class="fixed inset-0 z-30 glass flex flex-col items-center justify-center gap-8 md:hidden">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <button class="text-2xl font-semibold" on:click=go(item.section)>
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
