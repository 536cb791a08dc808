//! Todo Table Component
//!
//! Renders the core `TableView`: skeleton rows while loading, a placeholder
//! row when nothing matches, otherwise one row per visible todo.

use leptos::prelude::*;
use todo_core::{table_view, RowView, TableView};

use crate::context::use_app_context;

const COLUMNS: &str = "4";

#[component]
pub fn TodoTable() -> impl IntoView {
    let ctx = use_app_context();
    let table = move || ctx.store.with(|s| table_view(s, ctx.features, ctx.locale));

    view! {
        <table class="todo-table">
            <tbody>
                {move || match table() {
                    TableView::Loading { skeleton_rows } => (0..skeleton_rows)
                        .map(|_| view! {
                            <tr class="skeleton">
                                <td colspan=COLUMNS>
                                    <div class="skeleton-line short"></div>
                                    <div class="skeleton-line long"></div>
                                </td>
                            </tr>
                        })
                        .collect_view()
                        .into_any(),
                    TableView::Empty { message } => view! {
                        <tr>
                            <td colspan=COLUMNS class="empty">{message}</td>
                        </tr>
                    }
                    .into_any(),
                    TableView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <TodoRow row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

#[component]
fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <tr>
            <td>{id}</td>
            <td>
                <div class=if row.completed { "title done" } else { "title" }>{row.title}</div>
                <div class="description">{row.description}</div>
            </td>
            <td>{row.glyph}</td>
            <td class="actions">
                {row.actions.into_iter().map(|action| view! {
                    <button
                        type="button"
                        on:click=move |_| ctx.row_action(action.kind, id)
                    >
                        {action.label}
                    </button>
                }).collect_view()}
            </td>
        </tr>
    }
}
