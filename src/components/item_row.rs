//! Item Row Component
//!
//! One to-do entry: drag handle, status toggle, editable title, inline
//! delete confirmation, and the start/finish dates.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_sortable::{
    make_on_handle_mousedown, make_on_mouseleave, make_on_row_mouseenter, SortSignals,
};

use crate::commands::{self, UpdateItemArgs};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Item;

fn format_date(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

#[component]
pub fn ItemRow(index: usize, item: Item, sort: SortSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id.clone();
    let is_done = item.is_done();

    // DnD handlers - mousedown lives on the handle only
    let on_mousedown = make_on_handle_mousedown(sort, index);
    let on_mouseenter = make_on_row_mouseenter(sort, index);
    let on_mouseleave = make_on_mouseleave(sort);

    // Visual state
    let is_dragging = move || sort.dragging_index_read.get() == Some(index);
    let is_drop_target = move || sort.drop_index_read.get() == Some(index);

    let row_class = move || {
        let mut c = String::from("item-container");
        if is_done {
            c.push_str(" done");
        }
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    // Toggle between active and done; the backend pairs the finish time
    let toggle_id = id.clone();
    let toggle_status = move |_| {
        let id = toggle_id.clone();
        let next = if is_done { "active" } else { "done" };
        spawn_local(async move {
            let args = UpdateItemArgs {
                id: &id,
                title: None,
                status: Some(next),
                finish_time: None,
            };
            if let Ok(items) = commands::update_item(&args).await {
                ctx.replace(items);
            }
        });
    };

    // Commit rename when the title input loses focus
    let rename_id = id.clone();
    let rename = move |ev: web_sys::FocusEvent| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let title = input.value();
        let id = rename_id.clone();
        spawn_local(async move {
            let args = UpdateItemArgs {
                id: &id,
                title: Some(&title),
                status: None,
                finish_time: None,
            };
            if let Ok(items) = commands::update_item(&args).await {
                ctx.replace(items);
            }
        });
    };

    let delete_id = id.clone();
    let on_confirm = Callback::new(move |()| {
        let id = delete_id.clone();
        spawn_local(async move {
            if let Ok(items) = commands::delete_item(&id).await {
                ctx.replace(items);
            }
        });
    });

    let dates = match item.finish_time {
        Some(done) => format!("{} - {}", format_date(item.start_time), format_date(done)),
        None => format_date(item.start_time),
    };

    view! {
        <div class=row_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <span class="drag-handle" data-drag-handle="true" on:mousedown=on_mousedown>
                "⠿"
            </span>
            <button class="check-btn" on:click=toggle_status>
                {if is_done { "☑" } else { "☐" }}
            </button>
            <input class="item-title" prop:value=item.title.clone() on:blur=rename />
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm />
            <span class="item-finish-time">{dates}</span>
        </div>
    }
}
