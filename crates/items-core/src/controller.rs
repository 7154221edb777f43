//! Item List Controller
//!
//! Owns the form and table state for one screen and drives the REST calls.
//! Every successful mutation is followed by a full refetch; nothing is
//! patched locally.
//!
//! State sits in a `RefCell` that is never held across an `.await`, so a
//! second action may start while another is still in flight. Refetches from
//! overlapping actions can interleave; whichever finishes last is rendered.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};

use crate::api::ItemsApi;
use crate::config::ControllerConfig;
use crate::domain::ItemId;
use crate::error::ApiError;
use crate::form::{ItemForm, SubmitTarget};
use crate::table::{ItemTable, TableView};

/// Blocking browser interactions the controller needs
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn scroll_to_top(&self);
}

/// Everything the view renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemListState {
    pub form: ItemForm,
    pub table: ItemTable,
    pub view: TableView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected by validation, no request sent
    Invalid,
    /// Request sent and failed; form left untouched
    Failed(ApiError),
    /// Saved, form reset and list refetched
    Saved(SubmitTarget),
}

type Listener = Rc<dyn Fn(&ItemListState)>;

pub struct ItemListController<A: ItemsApi, D: Dialogs> {
    api: A,
    dialogs: D,
    config: ControllerConfig,
    state: RefCell<ItemListState>,
    listener: RefCell<Option<Listener>>,
}

impl<A: ItemsApi, D: Dialogs> ItemListController<A, D> {
    pub fn new(api: A, dialogs: D, config: ControllerConfig) -> Self {
        let state = ItemListState {
            form: ItemForm::new(config.priority.as_ref()),
            ..ItemListState::default()
        };
        Self {
            api,
            dialogs,
            config,
            state: RefCell::new(state),
            listener: RefCell::new(None),
        }
    }

    /// Called with a snapshot after every state change
    pub fn set_listener(&self, listener: impl Fn(&ItemListState) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> ItemListState {
        self.state.borrow().clone()
    }

    /// Label the submit button should show right now
    pub fn submit_label(&self) -> String {
        self.state.borrow().form.submit_label(&self.config.labels).to_string()
    }

    // ========================
    // Lifecycle
    // ========================

    /// Initial load once the page is ready
    pub async fn mount(&self) {
        info!("Mounting item list (priority: {})", self.config.priority_enabled());
        self.refresh().await;
    }

    /// Detach from the view; in-flight requests still finish but notify no one
    pub fn unmount(&self) {
        debug!("Unmounting item list");
        self.listener.borrow_mut().take();
    }

    // ========================
    // Form fields
    // ========================

    pub fn set_nombre(&self, value: String) {
        self.update(|s| s.form.nombre = value);
    }

    pub fn set_descripcion(&self, value: String) {
        self.update(|s| s.form.descripcion = value);
    }

    pub fn set_prioridad(&self, value: String) {
        self.update(|s| s.form.prioridad = value);
    }

    // ========================
    // Actions
    // ========================

    /// `GET /items` and re-render the whole table
    pub async fn refresh(&self) {
        match self.api.list().await {
            Ok(items) => {
                info!("Loaded {} items", items.len());
                self.update(|s| {
                    s.table.replace(items);
                    s.view = s.table.view();
                });
            }
            Err(e) => {
                error!("Failed to load items: {}", e);
                self.update(|s| s.view = TableView::Failed);
            }
        }
    }

    /// Create or update depending on the form mode
    pub async fn submit(&self) -> SubmitOutcome {
        let priority = self.config.priority.as_ref();
        let (validated, target) = {
            let state = self.state.borrow();
            (state.form.validate(priority), state.form.target())
        };

        let payload = match validated {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Form rejected: {}", e);
                self.dialogs.alert(&self.config.labels.validation_failed);
                return SubmitOutcome::Invalid;
            }
        };

        let result = match target {
            SubmitTarget::Create => self.api.create(&payload).await,
            SubmitTarget::Update(id) => self.api.update(id, &payload).await,
        };

        if let Err(e) = result {
            error!("Failed to save item ({:?}): {}", target, e);
            self.dialogs.alert(&self.config.labels.save_failed);
            return SubmitOutcome::Failed(e);
        }

        info!("Saved item ({:?})", target);
        self.update(|s| s.form.reset(priority));
        self.refresh().await;
        SubmitOutcome::Saved(target)
    }

    /// Load a listed item into the form. Returns false for unknown ids.
    pub fn edit(&self, id: ItemId) -> bool {
        let item = self.state.borrow().table.get(id).cloned();
        match item {
            Some(item) => {
                let priority = self.config.priority.as_ref();
                self.update(|s| s.form.begin_edit(&item, priority));
                self.dialogs.scroll_to_top();
                true
            }
            None => {
                warn!("Edit requested for item {} which is not listed", id);
                false
            }
        }
    }

    /// Confirm, `DELETE /items/{id}`, then refetch. Returns false if declined.
    ///
    /// The refetch happens whatever the DELETE status was.
    pub async fn delete(&self, id: ItemId) -> bool {
        if !self.dialogs.confirm(&self.config.labels.confirm_delete_for(id)) {
            return false;
        }
        if let Err(e) = self.api.delete(id).await {
            warn!("DELETE for item {} did not complete: {}", id, e);
        }
        self.refresh().await;
        true
    }

    fn update(&self, f: impl FnOnce(&mut ItemListState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&snapshot);
        }
    }
}
