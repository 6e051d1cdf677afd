use leptos::{either::EitherOf3, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    contact::{submit, ContactForm, Field, FormStore, SubmissionPhase},
    relay::{RelayClient, RelayConfig},
};

impl FormStore for RwSignal<ContactForm> {
    fn modify<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        self.try_update(f)
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-primary-500 transition-all duration-200";

#[component]
pub fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        // browser constraint checks have already passed when this fires
        ev.prevent_default();
        let relay = RelayClient::new(RelayConfig::from_build_env());
        spawn_local(async move {
            submit(&form, &relay).await;
        });
    };

    view! {
        <form class="mt-6 grid gap-4 max-w-xl" on:submit=on_submit>
            <label class="grid gap-1 text-sm font-medium">
                "Name"
                <input
                    type="text"
                    name="name"
                    required
                    autocomplete="name"
                    placeholder="Your name"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.field(Field::Name).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set_field(Field::Name, event_target_value(&ev)))
                    }
                />
            </label>
            <label class="grid gap-1 text-sm font-medium">
                "Email"
                <input
                    type="email"
                    name="email"
                    required
                    autocomplete="email"
                    placeholder="you@example.com"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.field(Field::Email).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set_field(Field::Email, event_target_value(&ev)))
                    }
                />
            </label>
            <label class="grid gap-1 text-sm font-medium">
                "Message"
                <textarea
                    name="message"
                    required
                    rows="5"
                    placeholder="What would you like to talk about?"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                    }
                ></textarea>
            </label>
            <div class="flex items-center gap-4">
                <button
                    type="submit"
                    class="primary-btn disabled:opacity-60 disabled:cursor-not-allowed"
                    disabled=move || form.with(ContactForm::is_sending)
                >
                    {move || {
                        if form.with(ContactForm::is_sending) { "Sending..." } else { "Send Message" }
                    }}
                </button>
                {move || match form.with(ContactForm::phase) {
                    SubmissionPhase::Succeeded => {
                        EitherOf3::A(
                            view! {
                                <p class="text-sm text-green-600 dark:text-green-400" role="status">
                                    "Thanks! Your message has been sent."
                                </p>
                            },
                        )
                    }
                    SubmissionPhase::Failed => {
                        EitherOf3::B(
                            view! {
                                <p class="text-sm text-red-600 dark:text-red-400" role="alert">
                                    "Something went wrong. Please try again."
                                </p>
                            },
                        )
                    }
                    SubmissionPhase::Idle | SubmissionPhase::Sending => EitherOf3::C(()),
                }}
            </div>
        </form>
    }
}
