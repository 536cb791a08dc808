//! Declarative view model for the todo table.
//!
//! Maps store state to what the table shows, without any markup. The web
//! front-end turns a [`TableView`] into DOM nodes.

use crate::config::Features;
use crate::locale::{Locale, Text};
use crate::store::TodoStore;
use crate::types::Todo;

/// Placeholder rows shown while a load is in flight.
pub const SKELETON_ROWS: usize = 2;

pub const DONE_GLYPH: &str = "✅";
pub const OPEN_GLYPH: &str = "⏳";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading { skeleton_rows: usize },
    Empty { message: &'static str },
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Title is rendered struck through.
    pub completed: bool,
    pub glyph: &'static str,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Toggle,
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub label: &'static str,
}

pub fn table_view(store: &TodoStore, features: Features, locale: Locale) -> TableView {
    if store.is_loading() {
        return TableView::Loading {
            skeleton_rows: SKELETON_ROWS,
        };
    }
    let visible = store.filtered();
    if visible.is_empty() {
        return TableView::Empty {
            message: locale.text(Text::EmptyList),
        };
    }
    TableView::Rows(
        visible
            .iter()
            .map(|todo| row_view(todo, features, locale))
            .collect(),
    )
}

pub fn row_view(todo: &Todo, features: Features, locale: Locale) -> RowView {
    let title = if todo.title.is_empty() {
        locale.text(Text::Untitled).to_string()
    } else {
        todo.title.clone()
    };
    RowView {
        id: todo.id,
        title,
        description: todo.description.clone(),
        completed: todo.is_completed,
        glyph: if todo.is_completed { DONE_GLYPH } else { OPEN_GLYPH },
        actions: row_actions(todo, features, locale),
    }
}

fn row_actions(todo: &Todo, features: Features, locale: Locale) -> Vec<RowAction> {
    let mut actions = Vec::with_capacity(3);
    if features.toggle {
        let label = if todo.is_completed { Text::MarkOpen } else { Text::MarkDone };
        actions.push(RowAction {
            kind: RowActionKind::Toggle,
            label: locale.text(label),
        });
    }
    if features.edit {
        actions.push(RowAction {
            kind: RowActionKind::Edit,
            label: locale.text(Text::Edit),
        });
    }
    if features.delete {
        actions.push(RowAction {
            kind: RowActionKind::Delete,
            label: locale.text(Text::Delete),
        });
    }
    actions
}
