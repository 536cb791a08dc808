//! Notice Bar Component
//!
//! Shows the current success/failure notice, if any.

use leptos::prelude::*;
use todo_core::NoticeKind;

use crate::context::use_app_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();
    let notice = move || ctx.store.with(|s| s.notice().copied());

    view! {
        <p
            class=move || match notice().map(|n| n.kind) {
                Some(NoticeKind::Failure) => "notice notice-failure",
                _ => "notice notice-success",
            }
            role="status"
        >
            {move || notice().map(|n| n.render(ctx.locale)).unwrap_or_default()}
        </p>
    }
}
