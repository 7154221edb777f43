//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use items_core::{ControllerConfig, HttpItemsApi, ItemForm, ItemListController, TableView};
use leptos::prelude::*;

use crate::dialogs::BrowserDialogs;

pub type Controller = ItemListController<HttpItemsApi, BrowserDialogs>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller lives on the main thread only
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// Table body; changes only when a fetch lands
    pub view: Memo<TableView>,
    /// Form fields and mode
    pub form: Memo<ItemForm>,
    config: StoredValue<ControllerConfig>,
}

impl AppContext {
    pub fn new(controller: Rc<Controller>) -> Self {
        // latest controller snapshot, pushed by its listener
        let state = RwSignal::new(controller.state());
        controller.set_listener(move |snapshot| state.set(snapshot.clone()));
        Self {
            config: StoredValue::new(controller.config().clone()),
            controller: StoredValue::new_local(controller),
            view: Memo::new(move |_| state.with(|s| s.view.clone())),
            form: Memo::new(move |_| state.with(|s| s.form.clone())),
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Controller if it has not been disposed yet
    pub fn try_controller(&self) -> Option<Rc<Controller>> {
        self.controller.try_get_value()
    }

    pub fn config(&self) -> ControllerConfig {
        self.config.get_value()
    }

    pub fn priority_enabled(&self) -> bool {
        self.config.with_value(|c| c.priority_enabled())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
