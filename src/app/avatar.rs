use leptos::prelude::*;

use crate::profile::{AVATAR_PATH, OWNER};

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <img
            src=AVATAR_PATH
            alt=OWNER
            class="w-56 h-56 rounded-full object-cover border-4 border-white dark:border-slate-700 shadow-lg animate-scale-in"
        />
    }
}
