use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    hero::Hero,
    navbar::Navbar,
    scroll::use_section_tracker,
    sections::{About, Contact, Footer, Projects, Skills},
    theme::provide_theme,
};
use crate::section::NavState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    provide_context(nav);
    let theme = provide_theme();
    use_section_tracker(nav);

    view! {
        <Title text="Portfolio" />
        <div
            class=move || {
                if theme.theme().is_dark() {
                    "dark min-h-screen bg-slate-900 text-slate-100"
                } else {
                    "min-h-screen bg-white text-slate-800"
                }
            }
            data-theme=move || theme.theme().as_str()
        >
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
