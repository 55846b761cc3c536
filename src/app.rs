//! Pintodo Frontend App
//!
//! Single-view to-do widget: title bar with pin/opacity controls, input
//! for new items, sortable item list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::commands;
use crate::components::{ItemListView, NewItemInput, TitleBar};
use crate::context::AppContext;
use crate::models::Item;

/// Apply an opacity fraction pushed over the `opacity` channel
fn apply_opacity_signal(ev: JsValue) {
    let fraction = js_sys::Reflect::get(&ev, &JsValue::from_str("payload"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("opacity", &fraction.to_string());
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<Item>::new());
    let (pin, set_pin) = signal(true);
    let (opacity, set_opacity) = signal(100u8);

    // Provide context to all children
    provide_context(AppContext::new((items, set_items)));

    // The shell applies whatever the channel last carried
    commands::listen_to("opacity", apply_opacity_signal);

    // One-shot startup load, then replay the stored pin/opacity toward the
    // window shell (the store itself is never read again)
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(initial) = commands::get_initial_state().await {
                set_pin.set(initial.pin);
                set_opacity.set(initial.opacity);
                set_items.set(initial.items);
                let _ = commands::set_pinned(initial.pin).await;
                let _ = commands::set_opacity(initial.opacity).await;
            }
        });
    });

    view! {
        <div class="app-layout">
            <TitleBar pin=pin set_pin=set_pin opacity=opacity set_opacity=set_opacity />

            <main class="main-content">
                <NewItemInput />

                <ItemListView items=items />

                <p class="item-count">{move || format!("{} items", items.get().len())}</p>
            </main>
        </div>
    }
}
