//! Edit modal state machine.
//!
//! `Closed -> Open` only after the item was fetched successfully;
//! `Open -> Closed` on cancel or on a successful save.

use crate::types::Todo;
use crate::validate::Draft;

/// Fields of the edit modal, pre-populated from a fetched item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl EditForm {
    pub fn draft(&self) -> Draft {
        Draft::new(self.title.clone(), self.description.clone())
    }

    /// Full record to write back, using an already validated draft.
    pub fn to_todo(&self, draft: Draft) -> Todo {
        Todo {
            id: self.id,
            title: draft.title,
            description: draft.description,
            is_completed: self.is_completed,
        }
    }
}

impl From<Todo> for EditForm {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open(EditForm),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open(_))
    }

    pub fn form(&self) -> Option<&EditForm> {
        match self {
            EditorState::Open(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        match self {
            EditorState::Open(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn open(&mut self, form: EditForm) {
        *self = EditorState::Open(form);
    }

    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }
}
