//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands and event channels.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{InitialState, Item};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen)]
    async fn tauri_listen(event: &str, handler: &js_sys::Function) -> JsValue;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct AddItemArgs<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct UpdateItemArgs<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(rename = "finishTime", skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<i64>,
}

#[derive(Serialize)]
pub struct IdArgs<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
pub struct ReorderArgs {
    pub from: usize,
    pub to: usize,
}

#[derive(Serialize)]
pub struct PinArgs {
    pub pin: bool,
}

#[derive(Serialize)]
pub struct OpacityArgs {
    pub percent: u8,
}

// ========================
// Item Commands
// ========================

pub async fn get_initial_state() -> Result<InitialState, String> {
    let result = invoke("get_initial_state", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_item(title: &str) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(&AddItemArgs { title }).map_err(|e| e.to_string())?;
    let result = invoke("add_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_item(args: &UpdateItemArgs<'_>) -> Result<Vec<Item>, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_item(id: &str) -> Result<Vec<Item>, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("delete_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn reorder_item(from: usize, to: usize) -> Result<Vec<Item>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderArgs { from, to }).map_err(|e| e.to_string())?;
    let result = invoke("reorder_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Window Commands
// ========================

pub async fn set_pinned(pin: bool) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PinArgs { pin }).map_err(|e| e.to_string())?;
    let _ = invoke("set_pinned", js_args).await;
    Ok(())
}

pub async fn set_opacity(percent: u8) -> Result<u8, String> {
    let js_args = serde_wasm_bindgen::to_value(&OpacityArgs { percent }).map_err(|e| e.to_string())?;
    let result = invoke("set_opacity", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn minimize_window() -> Result<(), String> {
    let _ = invoke("minimize_window", JsValue::NULL).await;
    Ok(())
}

pub async fn close_window() -> Result<(), String> {
    let _ = invoke("close_window", JsValue::NULL).await;
    Ok(())
}

// ========================
// Event Channels
// ========================

/// Subscribe to a backend event channel
///
/// Fire-and-forget: the unlisten handle is dropped because subscriptions
/// live for the whole window lifetime.
pub fn listen_to<F>(event: &'static str, callback: F)
where
    F: Fn(JsValue) + 'static,
{
    let closure = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
        callback(ev);
    });
    let handler: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();

    wasm_bindgen_futures::spawn_local(async move {
        let _ = tauri_listen(event, &handler).await;
    });
}
