//! Client core for a remote todo list.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! [`Transport`]; everything else (wire normalization, filtering,
//! validation, state and the table view model) is deterministic and tested
//! here.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection endpoint.
//! - `TodoService` runs operations over a transport and reports an `Outcome`
//!   instead of mutating state.
//! - `TodoStore` owns all client state; the filtered list is derived from it.
//! - Wire records accept either field casing and always write the
//!   capitalized one.

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod http;
pub mod locale;
pub mod notice;
pub mod service;
pub mod store;
pub mod transport;
pub mod types;
pub mod validate;
pub mod view;

pub use client::{ApiResponse, TodoClient};
pub use config::{ClientConfig, ConfigError, FeatureLevel, Features};
pub use editor::{EditForm, EditorState};
pub use error::ApiError;
pub use filter::{filter_todos, Filter, StatusFilter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use locale::{Locale, Text};
pub use notice::{Notice, NoticeKind};
pub use service::{LoadOutcome, Outcome, TodoService};
pub use store::TodoStore;
pub use transport::{Transport, TransportError};
pub use types::{NewTodo, Todo};
pub use validate::{Draft, Field, ValidationError};
pub use view::{table_view, RowAction, RowActionKind, RowView, TableView};
