use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{Reveal as RevealState, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Wraps `children` in an element that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                state.update(|s| {
                    s.observe(true);
                });
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN),
    );

    // nothing left to watch once revealed
    Effect::new(move |_| {
        if state.with(RevealState::is_revealed) {
            stop();
        }
    });

    view! {
        <div node_ref=node class=move || format!("{} {}", state.with(RevealState::class), class)>
            {children()}
        </div>
    }
}
