//! Application Context
//!
//! Shared state and operations provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{
    ClientConfig, Draft, EditForm, Features, Locale, Outcome, RowActionKind, Text, TodoClient,
    TodoService, TodoStore,
};

use crate::transport::FetchTransport;

pub type Service = TodoService<FetchTransport>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Every piece of client state lives here
    pub store: RwSignal<TodoStore>,
    service: StoredValue<Service, LocalStorage>,
    pub features: Features,
    pub locale: Locale,
    notice_ttl_ms: u32,
}

impl AppContext {
    pub fn new(config: &ClientConfig) -> Self {
        let features = config.features();
        let service = TodoService::new(
            TodoClient::new(&config.api_base_url),
            FetchTransport::default(),
            features,
        );
        Self {
            store: RwSignal::new(TodoStore::new()),
            service: StoredValue::new_local(service),
            features,
            locale: config.locale,
            notice_ttl_ms: config.notice_ttl_ms,
        }
    }

    pub fn text(&self, text: Text) -> &'static str {
        self.locale.text(text)
    }

    fn service(&self) -> Service {
        self.service.get_value()
    }

    /// Re-fetch the whole collection.
    pub fn reload(self) {
        self.store.update(|s| s.begin_load());
        let service = self.service();
        spawn_local(async move {
            let outcome = service.load().await;
            let failed = outcome.is_err();
            self.store.update(|s| s.finish_load(outcome));
            if failed {
                self.expire_notice();
            }
        });
    }

    /// Show the outcome's notice and reload when it asks for it.
    pub fn settle(self, outcome: &Outcome) {
        let reload = self.store.try_update(|s| s.apply(outcome)).unwrap_or(false);
        self.expire_notice();
        if reload {
            self.reload();
        }
    }

    /// Clear the current notice after the configured delay, whichever notice
    /// is showing by then.
    fn expire_notice(self) {
        let ttl = self.notice_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            self.store.update(|s| s.clear_notice());
        });
    }

    /// Run `create` and hand the outcome to `done` before settling it.
    pub fn create(self, draft: Draft, done: impl FnOnce(&Outcome) + 'static) {
        let service = self.service();
        spawn_local(async move {
            let outcome = service.create(&draft).await;
            done(&outcome);
            self.settle(&outcome);
        });
    }

    pub fn row_action(self, kind: RowActionKind, id: i64) {
        let service = self.service();
        spawn_local(async move {
            match kind {
                RowActionKind::Toggle => self.settle(&service.toggle(id).await),
                RowActionKind::Delete => self.settle(&service.delete(id).await),
                RowActionKind::Edit => {
                    let fetched = service.open_editor(id).await;
                    let failed = fetched.is_err();
                    self.store.update(|s| s.open_editor(fetched));
                    if failed {
                        self.expire_notice();
                    }
                }
            }
        });
    }

    /// Save the edit modal; a successful save closes it and reloads.
    pub fn save(self, form: EditForm, done: impl FnOnce(&Outcome) + 'static) {
        let service = self.service();
        spawn_local(async move {
            let outcome = service.update(&form).await;
            done(&outcome);
            let reload = self
                .store
                .try_update(|s| s.finish_save(&outcome))
                .unwrap_or(false);
            self.expire_notice();
            if reload {
                self.reload();
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
