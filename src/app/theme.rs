use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::{FromToStringCodec, OptionCodec};
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

#[cfg(feature = "hydrate")]
use crate::theme::THEME_KEY;
use crate::theme::{Theme, ThemePreference};

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    stored: Signal<Option<Theme>>,
    set_stored: WriteSignal<Option<Theme>>,
    prefers_dark: Signal<bool>,
    hydrated: RwSignal<bool>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        if !self.hydrated.get() {
            return Theme::default();
        }
        ThemePreference {
            stored: self.stored.get(),
        }
        .theme(self.prefers_dark.get())
    }

    pub fn toggle(&self) {
        let mut pref = ThemePreference {
            stored: self.stored.get_untracked(),
        };
        let next = pref.toggle(self.prefers_dark.get_untracked());
        log::debug!("theme toggled to {next}");
        self.set_stored.set(pref.stored);
    }
}

// Server renders light; the stored or system preference applies once hydrated.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) = use_local_storage_with_options::<
        Option<Theme>,
        OptionCodec<FromToStringCodec>,
    >(
        THEME_KEY,
        UseStorageOptions::default()
            .on_error(|e| log::warn!("theme preference storage failed: {e:?}")),
    );
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = {
        let (stored, set_stored) = signal(None::<Theme>);
        (Signal::from(stored), set_stored)
    };

    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));

    let ctx = ThemeContext {
        stored,
        set_stored,
        prefers_dark: use_preferred_dark(),
        hydrated,
    };
    provide_context(ctx);
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <button
            class="p-2 rounded-md text-xl hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors duration-200"
            aria-label=move || {
                if theme.theme().is_dark() {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                }
            }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.theme().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
