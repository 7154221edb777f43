//! Priority Selector Component
//!
//! `<select>` over the configured priority levels.

use items_core::PriorityConfig;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn PrioritySelector(priority: PriorityConfig) -> impl IntoView {
    let ctx = use_app_context();
    let selected = Memo::new(move |_| ctx.form.with(|f| f.prioridad.clone()));

    view! {
        <label for="item-prioridad">"Prioridad"</label>
        <select
            id="item-prioridad"
            on:change=move |ev| ctx.controller().set_prioridad(event_target_value(&ev))
        >
            {priority.levels.into_iter().map(|level| {
                let value = level.id.to_string();
                let option_value = value.clone();
                let is_selected = move || selected.with(|p| *p == value);
                view! {
                    <option value=option_value prop:selected=is_selected>{level.label}</option>
                }
            }).collect_view()}
        </select>
    }
}
