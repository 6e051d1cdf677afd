use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    view! {
        <div node_ref=target class="reveal" class:revealed=move || revealed.get()>
            {children()}
        </div>
    }
}
