//! Filter Bar Component
//!
//! Search box and the all/open/done radio group.

use leptos::prelude::*;
use todo_core::{StatusFilter, Text};

use crate::context::use_app_context;

fn status_label(status: StatusFilter) -> Text {
    match status {
        StatusFilter::All => Text::FilterAll,
        StatusFilter::Open => Text::FilterOpen,
        StatusFilter::Done => Text::FilterDone,
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-bar">
            <input
                type="search"
                placeholder=ctx.text(Text::SearchPlaceholder)
                prop:value=move || ctx.store.with(|s| s.filter().search.clone())
                on:input=move |ev| {
                    let search = event_target_value(&ev);
                    ctx.store.update(|s| s.set_search(search));
                }
            />
            <div class="status-radios">
                {StatusFilter::ALL.into_iter().map(|status| view! {
                    <label>
                        <input
                            type="radio"
                            name="status"
                            value=status.as_str()
                            prop:checked=move || ctx.store.with(|s| s.filter().status == status)
                            on:change=move |_| ctx.store.update(|s| s.set_status(status))
                        />
                        {ctx.text(status_label(status))}
                    </label>
                }).collect_view()}
            </div>
        </div>
    }
}
