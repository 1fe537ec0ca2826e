use leptos::prelude::*;

use super::{scroll::scroll_to_section, theme::ThemeToggle};
use crate::section::{NavState, Section};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class=move || {
                        if nav.with(|n| n.active == section) {
                            "nav-link px-3 py-2 rounded-md font-medium text-cyan-600 dark:text-cyan-400"
                        } else {
                            "nav-link px-3 py-2 rounded-md font-medium hover:text-cyan-600 dark:hover:text-cyan-400"
                        }
                    }
                    on:click=move |_| scroll_to_section(nav, section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 shadow-md bg-white/90 dark:bg-slate-900/90 backdrop-blur-sm">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <h2 class="text-2xl font-bold text-cyan-600 dark:text-cyan-400">"Portfolio"</h2>
                <div class=move || {
                    if nav.with(|n| n.menu_open) {
                        "flex flex-col md:flex-row absolute md:static top-16 inset-x-0 p-4 md:p-0 gap-2 bg-white dark:bg-slate-900 md:bg-transparent"
                    } else {
                        "hidden md:flex md:flex-row gap-2"
                    }
                }>{links}</div>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden flex flex-col gap-1 p-2"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span class="block w-6 h-0.5 bg-current"></span>
                        <span class="block w-6 h-0.5 bg-current"></span>
                        <span class="block w-6 h-0.5 bg-current"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
