use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    profile::{Section, OWNER},
    progress::scroll_percent,
    theme::Theme,
};

#[component]
pub fn Header() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    // mirror the preference onto <html> so `dark:` variants apply page-wide
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(root) = document().document_element() {
            theme.apply(&root);
        }
    });

    view! {
        <ScrollProgress />
        <header class="sticky top-0 z-40 backdrop-blur bg-white/70 dark:bg-slate-900/70 border-b border-slate-200 dark:border-slate-700">
            <nav class="container-max mx-auto px-6 py-3 flex items-center justify-between">
                <a href="#" class="font-extrabold tracking-tight text-primary-800 dark:text-primary-300">
                    {OWNER}
                </a>
                <div class="flex items-center gap-6">
                    <div class="hidden md:flex gap-6 text-sm">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class="hover:text-primary-700 dark:hover:text-primary-300 transition-colors duration-200"
                                    >
                                        {section.nav_label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        class="rounded-full p-2 hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors duration-200"
                        aria-label="Toggle dark mode"
                        aria-pressed=move || theme.get().is_dark().to_string()
                        on:click=move |_| set_theme.update(|t| *t = t.toggled())
                    >
                        {move || theme.get().toggle_label()}
                    </button>
                </div>
            </nav>
        </header>
    }
}

/// Thin bar along the top edge that fills as the page scrolls.
#[component]
fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (percent, set_percent) = signal(0.0_f64);

    Effect::new(move |_| {
        let top = scroll_y.get();
        if let Some(root) = document().document_element() {
            set_percent(scroll_percent(
                top,
                f64::from(root.scroll_height()),
                f64::from(root.client_height()),
            ));
        }
    });

    view! {
        <div class="fixed top-0 left-0 z-50 h-1 w-full pointer-events-none">
            <div
                class="h-full bg-primary-600 transition-[width] duration-100"
                style:width=move || format!("{:.2}%", percent.get())
            ></div>
        </div>
    }
}
