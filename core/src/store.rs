//! Client state, owned explicitly instead of living in page globals.
//!
//! `TodoStore` performs no I/O. Results from
//! [`TodoService`](crate::service::TodoService) are folded in through
//! `finish_load`, `apply` and friends; the visible list is always derived
//! from `todos` and `filter` on demand.

use tracing::debug;

use crate::editor::{EditForm, EditorState};
use crate::filter::{filter_todos, Filter, StatusFilter};
use crate::notice::Notice;
use crate::service::{LoadOutcome, Outcome};
use crate::types::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
    filter: Filter,
    loading: bool,
    editor: EditorState,
    notice: Option<Notice>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full remote collection as of the last successful load.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    /// Visible subset for the current filter.
    pub fn filtered(&self) -> Vec<Todo> {
        filter_todos(&self.todos, &self.filter)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Add and save stay disabled while a load is in flight.
    pub fn writes_enabled(&self) -> bool {
        !self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Settle a load: replace the collection on success, keep the previous
    /// one and show the notice on failure. Loading ends either way.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            Ok(todos) => {
                debug!(count = todos.len(), "store replaced");
                self.todos = todos;
            }
            Err(notice) => self.show(notice),
        }
        self.loading = false;
    }

    /// Show the outcome's notice; returns whether a reload is due.
    pub fn apply(&mut self, outcome: &Outcome) -> bool {
        self.show(outcome.notice);
        outcome.reload
    }

    /// Like [`apply`](Self::apply) for the edit modal: a successful save
    /// also closes it.
    pub fn finish_save(&mut self, outcome: &Outcome) -> bool {
        if outcome.succeeded() {
            self.editor.close();
        }
        self.apply(outcome)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Clears whatever notice is current, including one shown after the
    /// timer that triggers this was started.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.editor.form_mut()
    }

    /// Open the modal with a fetched item, or stay closed and show why not.
    pub fn open_editor(&mut self, fetched: Result<EditForm, Notice>) {
        match fetched {
            Ok(form) => self.editor.open(form),
            Err(notice) => self.show(notice),
        }
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }
}
