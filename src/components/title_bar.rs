//! Custom Title Bar Component
//!
//! Provides window controls (pin, opacity, minimize, close) in a
//! draggable title bar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;

/// Custom title bar with window controls
#[component]
pub fn TitleBar(
    pin: ReadSignal<bool>,
    set_pin: WriteSignal<bool>,
    opacity: ReadSignal<u8>,
    set_opacity: WriteSignal<u8>,
) -> impl IntoView {
    let (show_opacity, set_show_opacity) = signal(false);

    // Toggle pin
    let toggle_pin = move |_| {
        let new_pin = !pin.get();
        set_pin.set(new_pin);
        spawn_local(async move {
            let _ = commands::set_pinned(new_pin).await;
        });
    };

    // Slider input; the backend clamps and echoes the accepted value
    let on_slider = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let percent = input.value().parse::<u8>().unwrap_or(100);
        set_opacity.set(percent);
        spawn_local(async move {
            if let Ok(clamped) = commands::set_opacity(percent).await {
                set_opacity.set(clamped);
            }
        });
    };

    // Minimize window
    let minimize = move |_| {
        spawn_local(async {
            let _ = commands::minimize_window().await;
        });
    };

    // Close window
    let close = move |_| {
        spawn_local(async {
            let _ = commands::close_window().await;
        });
    };

    view! {
        <div class="custom-titlebar">
            <div class="titlebar-drag-region" data-tauri-drag-region>
                <span class="titlebar-title">"Pintodo"</span>
            </div>

            <div class="titlebar-controls">
                <button
                    class="titlebar-btn opacity"
                    title="透明度"
                    on:click=move |_| set_show_opacity.update(|v| *v = !*v)
                >
                    "◐"
                </button>
                <Show when=move || show_opacity.get()>
                    <div class="opacity-popover">
                        <span>"80"</span>
                        <input
                            type="range"
                            min="80"
                            max="100"
                            prop:value=move || opacity.get().to_string()
                            on:input=on_slider
                        />
                        <span>"100"</span>
                    </div>
                </Show>
                <button
                    class=move || if pin.get() { "titlebar-btn pin active" } else { "titlebar-btn pin" }
                    title=move || if pin.get() { "取消固定" } else { "固定窗口" }
                    on:click=toggle_pin
                >
                    "📌"
                </button>
                <button class="titlebar-btn minimize" title="最小化" on:click=minimize>
                    "─"
                </button>
                <button class="titlebar-btn close" title="关闭" on:click=close>
                    "✕"
                </button>
            </div>
        </div>
    }
}
