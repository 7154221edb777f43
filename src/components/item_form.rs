//! Item Form Component
//!
//! Create/Edit form. The hidden id and the button label follow the
//! controller's form mode.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PrioritySelector;
use crate::context::use_app_context;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.form;
    let config = ctx.config();
    let labels = config.labels.clone();

    let hidden_id = Memo::new(move |_| form.with(|f| f.hidden_id()));
    let nombre = Memo::new(move |_| form.with(|f| f.nombre.clone()));
    let descripcion = Memo::new(move |_| form.with(|f| f.descripcion.clone()));
    let submit_label = Memo::new(move |_| form.with(|f| f.submit_label(&labels).to_string()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    view! {
        <form id="crud-form" class="item-form" on:submit=on_submit>
            <input
                type="hidden"
                id="item-id"
                prop:value=move || hidden_id.get()
            />

            <label for="item-name">"Nombre"</label>
            <input
                type="text"
                id="item-name"
                prop:value=move || nombre.get()
                on:input=move |ev| ctx.controller().set_nombre(event_target_value(&ev))
            />

            <label for="item-description">"Descripción"</label>
            <input
                type="text"
                id="item-description"
                prop:value=move || descripcion.get()
                on:input=move |ev| ctx.controller().set_descripcion(event_target_value(&ev))
            />

            {config.priority.map(|priority| view! { <PrioritySelector priority=priority /> })}

            <button type="submit" id="submit-button">{move || submit_label.get()}</button>
        </form>
    }
}
