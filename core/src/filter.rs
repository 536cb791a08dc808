//! Client-side text and status filtering over the loaded collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Todo;

/// Status radio group value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Done,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Open, StatusFilter::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::Done => "done",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => !todo.is_completed,
            StatusFilter::Done => todo.is_completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "open" => Ok(StatusFilter::Open),
            "done" => Ok(StatusFilter::Done),
            other => Err(format!("unknown status filter `{other}`")),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of the search box and status radios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub status: StatusFilter,
}

impl Filter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

/// Visible subset of `todos`, in input order.
///
/// The query is lowercased but not trimmed; an item matches when either its
/// title or its description contains it.
pub fn filter_todos(todos: &[Todo], filter: &Filter) -> Vec<Todo> {
    let query = filter.search.to_lowercase();
    todos
        .iter()
        .filter(|todo| filter.status.matches(todo) && matches_text(todo, &query))
        .cloned()
        .collect()
}

fn matches_text(todo: &Todo, query: &str) -> bool {
    query.is_empty()
        || todo.title.to_lowercase().contains(query)
        || todo.description.to_lowercase().contains(query)
}
