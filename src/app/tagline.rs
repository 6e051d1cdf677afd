use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    profile::TAGLINES,
    tagline::{Tagline, TAGLINE_INTERVAL_MS},
};

#[component]
pub fn RotatingTagline() -> impl IntoView {
    let tagline = RwSignal::new(Tagline::new(TAGLINES));

    // the interval is cleared when this component's owner is disposed
    let _ = use_interval_fn(move || tagline.update(Tagline::advance), TAGLINE_INTERVAL_MS);

    view! {
        <p class="mt-3 h-7 text-lg font-medium text-primary-700 dark:text-primary-300" aria-live="polite">
            {move || {
                let text = tagline.with(|t| t.current());
                view! { <span class="inline-block animate-fade-up">{text}</span> }
            }}
        </p>
    }
}
