//! Leptos DragSort Utilities
//!
//! Mouse-event drag-to-reorder for vertical Leptos lists.
//! Uses movement threshold to distinguish click from drag. While a drag is
//! active, the target slot is recomputed from scratch on every pointer move
//! by comparing the pointer against each non-dragging row's vertical
//! midpoint, and the dragged row is re-placed live through a callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Attribute carrying the row's item id, set by the list view
pub const ROW_ID_ATTR: &str = "data-id";

/// Vertical extent of one list row, in render order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBounds {
    pub top: f64,
    pub height: f64,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Find the row the dragged item should be inserted before.
///
/// `rows` holds the non-dragging rows in render order. The winner is the
/// candidate whose midpoint lies below the pointer with the smallest gap
/// (the largest still-negative `pointer_y - midpoint` offset). `None` means
/// the pointer is below every midpoint and the item belongs at the end.
pub fn insert_before_index(pointer_y: f64, rows: &[RowBounds]) -> Option<usize> {
    let mut closest: Option<(f64, usize)> = None;
    for (idx, row) in rows.iter().enumerate() {
        let offset = pointer_y - (row.top + row.height / 2.0);
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, idx));
        }
    }
    closest.map(|(_, idx)| idx)
}

/// Sample the bounds and ids of every row matching `selector` except the
/// dragged one, in document order.
fn collect_rows(selector: &str, skip_id: u32) -> (Vec<RowBounds>, Vec<u32>) {
    let mut bounds = Vec::new();
    let mut ids = Vec::new();
    let doc = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return (bounds, ids),
    };
    let nodes = match doc.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(_) => return (bounds, ids),
    };
    for i in 0..nodes.length() {
        let el = match nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let id = match el.get_attribute(ROW_ID_ATTR).and_then(|v| v.parse::<u32>().ok()) {
            Some(id) => id,
            None => continue,
        };
        if id == skip_id {
            continue;
        }
        let rect = el.get_bounding_client_rect();
        bounds.push(RowBounds { top: rect.top(), height: rect.height() });
        ids.push(id);
    }
    (bounds, ids)
}

/// Bind the global document listeners that drive a drag gesture.
///
/// `on_place` is called on every pointer move while dragging with
/// `(dragged_id, insert_before_id)`; `None` means move to the end. A gesture
/// that ends simply leaves the row wherever the last call placed it.
pub fn bind_global_handlers<F>(dnd: DndSignals, row_selector: &'static str, on_place: F)
where
    F: Fn(u32, Option<u32>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
                web_sys::console::log_1(&format!("[DND] Drag start: item={:?}", pending).into());
            }
        }

        if let Some(dragged) = dnd.dragging_id_read.get_untracked() {
            let (bounds, ids) = collect_rows(row_selector, dragged);
            let before = insert_before_index(ev.client_y() as f64, &bounds).map(|idx| ids[idx]);
            on_place(dragged, before);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Some(dragged) = dnd.dragging_id_read.get_untracked() {
            web_sys::console::log_1(&format!("[DND] Drag end: item={}", dragged).into());
        }
        // Not dragging - just end any pending state, so the click fires naturally
        end_drag(&dnd);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
