//! Create Form Component
//!
//! Title and description inputs for new todos.

use leptos::html;
use leptos::prelude::*;
use todo_core::{Draft, Field, Text};

use crate::context::use_app_context;

#[component]
pub fn CreateForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let title_ref = NodeRef::<html::Input>::new();
    let description_ref = NodeRef::<html::Input>::new();

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);
        let draft = Draft::new(title.get_untracked(), description.get_untracked());
        ctx.create(draft, move |outcome| {
            set_busy.set(false);
            if outcome.succeeded() {
                set_title.set(String::new());
                set_description.set(String::new());
            }
            let target = match outcome.focus {
                Some(Field::Title) => title_ref.get_untracked(),
                Some(Field::Description) => description_ref.get_untracked(),
                None => None,
            };
            if let Some(input) = target {
                let _ = input.focus();
            }
        });
    };

    view! {
        <form class="create-form" on:submit=create>
            <input
                type="text"
                node_ref=title_ref
                placeholder=ctx.text(Text::TitleLabel)
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                node_ref=description_ref
                placeholder=ctx.text(Text::DescriptionLabel)
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button
                type="submit"
                disabled=move || busy.get() || !ctx.store.with(|s| s.writes_enabled())
            >
                {ctx.text(Text::Add)}
            </button>
        </form>
    }
}
