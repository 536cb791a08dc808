//! Todo operations over a [`Transport`].
//!
//! # Design
//! `TodoService` is stateless: it owns a `TodoClient`, a transport and the
//! feature switches, and each operation returns what happened instead of
//! mutating anything. The caller folds results into a
//! [`TodoStore`](crate::store::TodoStore) and reloads when an [`Outcome`]
//! asks for it. Every operation settles into a [`Notice`]; nothing here
//! propagates an error to the page.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::{ApiResponse, TodoClient};
use crate::config::Features;
use crate::editor::EditForm;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::locale::Text;
use crate::notice::Notice;
use crate::transport::Transport;
use crate::types::{NewTodo, Todo};
use crate::validate::{Draft, Field, FormKind};

/// Result of a full collection load.
pub type LoadOutcome = Result<Vec<Todo>, Notice>;

/// What a mutating operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    /// The remote state changed and the collection must be re-fetched.
    pub reload: bool,
    /// Form field to focus after a validation failure.
    pub focus: Option<Field>,
}

impl Outcome {
    fn success(text: Text) -> Self {
        Self {
            notice: Notice::success(text),
            reload: true,
            focus: None,
        }
    }

    fn failure(text: Text) -> Self {
        Self {
            notice: Notice::failure(text),
            reload: false,
            focus: None,
        }
    }

    fn invalid(text: Text, field: Field) -> Self {
        Self {
            focus: Some(field),
            ..Self::failure(text)
        }
    }

    pub fn succeeded(&self) -> bool {
        self.notice.is_success()
    }
}

#[derive(Debug, Clone)]
pub struct TodoService<T> {
    client: TodoClient,
    transport: T,
    features: Features,
}

impl<T: Transport> TodoService<T> {
    pub fn new(client: TodoClient, transport: T, features: Features) -> Self {
        Self {
            client,
            transport,
            features,
        }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    /// Issue `method` against the collection endpoint plus `suffix`.
    pub async fn request(&self, method: HttpMethod, suffix: &str, body: Option<&Value>) -> ApiResponse {
        self.send(self.client.build_request(method, suffix, body)).await
    }

    async fn send(&self, request: HttpRequest) -> ApiResponse {
        let method = request.method;
        let path = request.path.clone();
        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(%method, %path, status = response.status, "response received");
                self.client.parse_envelope(response)
            }
            Err(err) => {
                warn!(%method, %path, error = %err, "request failed without a response");
                ApiResponse::transport_failure()
            }
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await;
        self.client.parse_list_todos(response)
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_get_todo(id)).await;
        self.client.parse_get_todo(response)
    }

    pub async fn load(&self) -> LoadOutcome {
        match self.fetch_all().await {
            Ok(todos) => {
                info!(count = todos.len(), "todos loaded");
                Ok(todos)
            }
            Err(err) => {
                warn!(error = %err, "loading todos failed");
                Err(Notice::failure(Text::LoadFailed))
            }
        }
    }

    pub async fn create(&self, draft: &Draft) -> Outcome {
        let draft = match self.check(draft, FormKind::Create) {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };
        let result = match self
            .client
            .build_create_todo(&NewTodo::new(draft.title, draft.description))
        {
            Ok(request) => {
                let response = self.send(request).await;
                self.client.parse_create_todo(response)
            }
            Err(err) => Err(err),
        };
        report("create", result, Text::Created, Text::CreateFailed)
    }

    /// Save the edit modal: validate, then write the full record back.
    pub async fn update(&self, form: &EditForm) -> Outcome {
        let draft = match self.check(&form.draft(), FormKind::Edit) {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };
        let result = self.replace(&form.to_todo(draft)).await;
        report("update", result, Text::Saved, Text::UpdateFailed)
    }

    /// Issued whether or not `id` is known locally; the status decides.
    pub async fn delete(&self, id: i64) -> Outcome {
        let response = self.send(self.client.build_delete_todo(id)).await;
        let result = self.client.parse_delete_todo(response);
        report("delete", result, Text::Deleted, Text::DeleteFailed)
    }

    /// Read the item, then write it back with the completion flag inverted.
    /// A failed read aborts before any write.
    pub async fn toggle(&self, id: i64) -> Outcome {
        let current = match self.fetch_one(id).await {
            Ok(todo) => todo,
            Err(err) => {
                warn!(id, error = %err, "toggle aborted, item could not be read");
                return Outcome::failure(Text::ReadFailed);
            }
        };
        let result = self.replace(&current.toggled()).await;
        report("toggle", result, Text::StateUpdated, Text::StateFailed)
    }

    /// Fetch the item the edit modal should show.
    pub async fn open_editor(&self, id: i64) -> Result<EditForm, Notice> {
        self.fetch_one(id).await.map(EditForm::from).map_err(|err| {
            warn!(id, error = %err, "could not load todo for editing");
            Notice::failure(Text::ItemLoadFailed)
        })
    }

    async fn replace(&self, todo: &Todo) -> Result<(), ApiError> {
        let request = self.client.build_replace_todo(todo)?;
        let response = self.send(request).await;
        self.client.parse_replace_todo(response)
    }

    fn check(&self, draft: &Draft, form: FormKind) -> Result<Draft, Outcome> {
        if !self.features.validate {
            return Ok(draft.trimmed());
        }
        draft.validate().map_err(|err| {
            debug!(?form, error = %err, "draft rejected");
            Outcome::invalid(err.text(form), err.field())
        })
    }
}

fn report(op: &'static str, result: Result<(), ApiError>, ok: Text, failed: Text) -> Outcome {
    match result {
        Ok(()) => {
            info!(op, "todo operation succeeded");
            Outcome::success(ok)
        }
        Err(err) => {
            warn!(op, error = %err, "todo operation failed");
            Outcome::failure(failed)
        }
    }
}
