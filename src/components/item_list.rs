//! Item List Component
//!
//! Renders the ordered rows and wires the drag-reorder gesture. A
//! completed gesture reports (from, to); the backend validates the
//! indices and returns the new sequence.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::{bind_global_mouseup, create_sort_signals};

use crate::commands;
use crate::components::ItemRow;
use crate::context::AppContext;
use crate::models::Item;

#[component]
pub fn ItemListView(items: ReadSignal<Vec<Item>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Create DnD signals
    let sort = create_sort_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(sort, move |from, to| {
        spawn_local(async move {
            match commands::reorder_item(from, to).await {
                Ok(items) => ctx.replace(items),
                Err(e) => web_sys::console::warn_1(&format!("reorder rejected: {}", e).into()),
            }
        });
    });

    let each_items = move || items.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="item-list">
            <For
                each=each_items
                key=|(index, item)| {
                    // Keyed on every rendered field so changes re-render the row
                    (
                        *index,
                        item.id.clone(),
                        item.title.clone(),
                        item.status.clone(),
                        item.finish_time,
                    )
                }
                children=move |(index, item)| {
                    view! { <ItemRow index=index item=item sort=sort /> }
                }
            />
        </div>
    }
}
