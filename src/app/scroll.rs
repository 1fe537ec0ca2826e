use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::section::{NavState, Section, SectionBounds};

fn section_bounds(section: Section) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

pub fn use_section_tracker(nav: RwSignal<NavState>) {
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let scroll_y = scroll_y.get();
        let current = nav.get_untracked();
        let mut next = current;
        next.track(scroll_y, section_bounds);
        if next != current {
            nav.set(next);
        }
    });
}

pub fn scroll_to_section(nav: RwSignal<NavState>, target: Section) {
    nav.update(|state| {
        state.navigate(target, |section| {
            let Some(el) = document().get_element_by_id(section.id()) else {
                log::debug!("no element for section {section}");
                return false;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
            true
        });
    });
}
