use leptos::prelude::*;

use crate::profile::whatsapp_url;

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    view! {
        <a
            href=whatsapp_url()
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            class="fixed bottom-6 right-6 z-40 flex h-14 w-14 items-center justify-center rounded-full bg-[#25D366] text-2xl text-white shadow-lg hover:scale-110 transition-transform duration-200"
        >
            "💬"
        </a>
    }
}
