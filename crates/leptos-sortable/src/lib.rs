//! Leptos Sortable List Utilities
//!
//! Drag-to-reorder for flat lists in Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Activation policy: a drag only starts from an element carrying the
//! `data-drag-handle` attribute. Mousedown anywhere else on the row is
//! rejected before any reorder is attempted.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    pub drop_index_read: ReadSignal<Option<usize>>,
    pub drop_index_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown on handle but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Attribute marking the only valid drag origin within a row
pub const DRAG_HANDLE_ATTR: &str = "data-drag-handle";

pub fn create_sort_signals() -> SortSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (drop_index_read, drop_index_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_index_read,
        dragging_index_write,
        drop_index_read,
        drop_index_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Whether a mousedown originated on (or inside) a drag handle element
pub fn accepts_drag_origin(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    matches!(
        element.closest(&format!("[{}]", DRAG_HANDLE_ATTR)),
        Ok(Some(_))
    )
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_index_write.set(None);
    sort.drop_index_write.set(None);
    sort.pending_index_write.set(None);
    sort.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sort.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a row's drag handle
/// Records pending drag with start position; non-handle origins are rejected
pub fn make_on_handle_mousedown(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if !accepts_drag_origin(&ev) {
            return;
        }
        ev.prevent_default();
        sort.pending_index_write.set(Some(index));
        sort.start_x_write.set(ev.client_x());
        sort.start_y_write.set(ev.client_y());
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_index_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_index_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_index_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop position)
pub fn make_on_row_mouseenter(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = sort.dragging_index_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != index {
                sort.drop_index_write.set(Some(index));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_index_read.get_untracked().is_some() {
            sort.drop_index_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(from, to)` fires only for a completed drag gesture over a
/// different row; a plain click never reaches it.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_index = sort.dragging_index_read.get_untracked();
        let drop_index = sort.drop_index_read.get_untracked();

        // Clear pending state first
        sort.pending_index_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(from), Some(to)) = (dragging_index, drop_index) {
            end_drag(&sort);
            on_drop(from, to);
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}
