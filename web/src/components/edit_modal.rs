//! Edit Modal Component
//!
//! Shown while the store's editor is open. Inputs write straight into the
//! open `EditForm`; save validates and writes the full record back.

use leptos::html;
use leptos::prelude::*;
use todo_core::{EditForm, Field, Text};

use crate::context::use_app_context;

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();

    let (saving, set_saving) = signal(false);
    let title_ref = NodeRef::<html::Input>::new();
    let description_ref = NodeRef::<html::Input>::new();

    let is_open = move || ctx.store.with(|s| s.editor().is_open());
    let read = move |f: fn(&EditForm) -> String| {
        ctx.store.with(|s| s.editor().form().map(f).unwrap_or_default())
    };
    let edit = move |apply: Box<dyn FnOnce(&mut EditForm)>| {
        ctx.store.update(|s| {
            if let Some(form) = s.edit_form_mut() {
                apply(form);
            }
        });
    };

    let save = move |_: web_sys::MouseEvent| {
        let Some(form) = ctx.store.with_untracked(|s| s.editor().form().cloned()) else {
            return;
        };
        set_saving.set(true);
        ctx.save(form, move |outcome| {
            set_saving.set(false);
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
        <Show when=is_open>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h2>{ctx.text(Text::EditHeading)}</h2>
                    <p class="modal-id">"#" {move || ctx.store.with(|s| s.editor().form().map(|f| f.id))}</p>
                    <label>
                        {ctx.text(Text::TitleLabel)}
                        <input
                            type="text"
                            node_ref=title_ref
                            prop:value=move || read(|f| f.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit(Box::new(move |f| f.title = value));
                            }
                        />
                    </label>
                    <label>
                        {ctx.text(Text::DescriptionLabel)}
                        <input
                            type="text"
                            node_ref=description_ref
                            prop:value=move || read(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit(Box::new(move |f| f.description = value));
                            }
                        />
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || ctx.store.with(|s| {
                                s.editor().form().is_some_and(|f| f.is_completed)
                            })
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                edit(Box::new(move |f| f.is_completed = checked));
                            }
                        />
                        {ctx.text(Text::CompletedLabel)}
                    </label>
                    <div class="modal-actions">
                        <button
                            type="button"
                            on:click=move |_| ctx.store.update(|s| s.close_editor())
                        >
                            {ctx.text(Text::Cancel)}
                        </button>
                        <button
                            type="button"
                            disabled=move || saving.get() || !ctx.store.with(|s| s.writes_enabled())
                            on:click=save
                        >
                            {ctx.text(Text::Save)}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
