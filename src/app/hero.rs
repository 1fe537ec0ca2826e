use leptos::prelude::*;

use super::scroll::scroll_to_section;
use crate::{
    portfolio::{PROFILE, ROLES},
    section::{NavState, Section},
    typewriter::Typewriter,
};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center pt-20 px-4 bg-gradient-to-br from-slate-50 to-cyan-50 dark:from-slate-900 dark:to-slate-800"
        >
            <div class="max-w-6xl mx-auto w-full flex flex-col-reverse lg:flex-row items-center gap-12">
                <div class="flex-1 text-center lg:text-left">
                    <h1 class="text-4xl sm:text-5xl font-bold mb-4">
                        "Hello, I'm " <span class="text-cyan-600 dark:text-cyan-400">{PROFILE.name}</span>
                    </h1>
                    <h2
                        class="text-2xl sm:text-3xl font-semibold mb-6 text-slate-600 dark:text-slate-300 min-h-[2.5rem]"
                        aria-label=PROFILE.role
                    >
                        <TypedRole />
                    </h2>
                    <p class="text-lg leading-relaxed mb-8 max-w-xl mx-auto lg:mx-0">{PROFILE.intro}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                        <button
                            class="px-6 py-3 rounded-md font-medium bg-cyan-600 hover:bg-cyan-700 text-white transition-all duration-200"
                            on:click=move |_| scroll_to_section(nav, Section::Projects)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="px-6 py-3 rounded-md font-medium border border-cyan-600 text-cyan-600 dark:text-cyan-400 hover:bg-cyan-600/10 transition-all duration-200"
                            on:click=move |_| scroll_to_section(nav, Section::Contact)
                        >
                            "Get In Touch"
                        </button>
                        <a
                            href=PROFILE.resume
                            download="resume.pdf"
                            class="px-6 py-3 rounded-md font-medium text-slate-600 dark:text-slate-300 hover:underline"
                        >
                            "Download CV"
                        </a>
                    </div>
                </div>
                <div class="flex-shrink-0">
                    <img
                        src=PROFILE.portrait
                        alt="Profile"
                        class="w-64 h-64 lg:w-80 lg:h-80 rounded-full object-cover shadow-2xl border-4 border-white dark:border-slate-700"
                    />
                </div>
            </div>
        </section>
    }
}

/// Types and deletes each role in turn, forever.
#[component]
fn TypedRole() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::showing_first(ROLES));
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        timer.set_value(None);
    };

    // re-arms after every tick; at most one pending timeout
    Effect::new(move |_| {
        let delay = typewriter.with(Typewriter::delay);
        clear_timer();
        match set_timeout_with_handle(move || typewriter.update(Typewriter::tick), delay) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => log::warn!("could not schedule typewriter tick: {e:?}"),
        }
    });
    on_cleanup(clear_timer);

    view! {
        <span aria-hidden="true">{move || typewriter.with(|t| t.text())}</span>
        <span class="typed-caret" aria-hidden="true">
            "|"
        </span>
    }
}
