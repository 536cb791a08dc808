//! Todo Frontend App
//!
//! Main application component: create form, filters, table and edit modal.

use leptos::prelude::*;

use crate::components::{CreateForm, EditModal, FilterBar, NoticeBar, TodoTable};
use crate::config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(&config::load());
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>
            <NoticeBar />
            <CreateForm />
            <FilterBar />
            <TodoTable />
            {ctx.features.edit.then(|| view! { <EditModal /> })}
        </main>
    }
}
