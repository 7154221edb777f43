//! Item List App
//!
//! Builds the controller, wires it to the view and runs its lifecycle.

use std::rc::Rc;

use items_core::{ControllerConfig, HttpItemsApi, ItemListController};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::components::{ItemForm, ItemTable};
use crate::config::api_base_url;
use crate::context::AppContext;
use crate::dialogs::BrowserDialogs;

#[component]
pub fn App(config: ControllerConfig) -> impl IntoView {
    let base_url = api_base_url(&config).unwrap_or_else(|e| {
        error!("Falling back to a relative API path: {}", e);
        config.api_path.clone()
    });
    let controller = Rc::new(ItemListController::new(
        HttpItemsApi::new(base_url),
        BrowserDialogs,
        config,
    ));

    let ctx = AppContext::new(controller.clone());
    provide_context(ctx);

    spawn_local(async move {
        controller.mount().await;
    });

    on_cleanup(move || {
        if let Some(controller) = ctx.try_controller() {
            controller.unmount();
        }
    });

    view! {
        <main class="items-app">
            <h1>"Gestión de Elementos"</h1>
            <ItemForm />
            <ItemTable />
        </main>
    }
}
