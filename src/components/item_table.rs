//! Item Table Component
//!
//! Renders the controller's table view: one row per fetched item, or a
//! single placeholder row for the empty and failed states.

use items_core::table::column_count;
use items_core::{Labels, TableRow, TableView};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_app_context();
    let view = ctx.view;
    let with_priority = ctx.priority_enabled();
    let labels = ctx.config().labels;
    let colspan = column_count(with_priority).to_string();

    let body = move || match view.get() {
        TableView::Loading => ().into_any(),
        TableView::Empty => placeholder_row(&colspan, &labels.empty).into_any(),
        TableView::Failed => placeholder_row(&colspan, &labels.load_failed).into_any(),
        TableView::Rows(rows) => rows
            .into_iter()
            .map(|row| item_row(ctx, row, with_priority, &labels))
            .collect_view()
            .into_any(),
    };

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Descripción"</th>
                    {with_priority.then(|| view! { <th>"Prioridad"</th> })}
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody id="table-body">{body}</tbody>
        </table>
    }
}

fn placeholder_row(colspan: &str, message: &str) -> impl IntoView {
    let colspan = colspan.to_string();
    let message = message.to_string();
    view! {
        <tr>
            <td colspan=colspan>{message}</td>
        </tr>
    }
}

fn item_row(ctx: AppContext, row: TableRow, with_priority: bool, labels: &Labels) -> impl IntoView {
    let id = row.id;
    let on_edit = move |_| {
        ctx.controller().edit(id);
    };
    let on_delete = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.delete(id).await;
        });
    };
    let priority_cell = with_priority.then(|| {
        let label = row.tipo_prioridad.clone().unwrap_or_default();
        view! { <td>{label}</td> }
    });

    view! {
        <tr
            data-item-id=id.to_string()
            data-prioridad-id=row.id_prioridad.map(|p| p.to_string())
        >
            <td>{id.to_string()}</td>
            <td>{row.nombre}</td>
            <td>{row.descripcion}</td>
            {priority_cell}
            <td>
                <button class="action-btn edit-btn" on:click=on_edit>
                    {labels.edit_button.clone()}
                </button>
                <button class="action-btn delete-btn" on:click=on_delete>
                    {labels.delete_button.clone()}
                </button>
            </td>
        </tr>
    }
}
