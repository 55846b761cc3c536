//! New Item Input Component
//!
//! Single text input; Enter creates an item at the front of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn NewItemInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty titles are allowed, matching the backend contract
        let title = new_title.get();

        spawn_local(async move {
            if let Ok(item) = commands::add_item(&title).await {
                ctx.push_front(item);
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                class="new-item"
                placeholder="添加新的待办事项"
                prop:value=move || new_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_title.set(input.value());
                }
            />
        </form>
    }
}
