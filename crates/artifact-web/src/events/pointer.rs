use crate::dom;
use artifact_core::{client_to_ndc, SharedInput};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer moves aim the artifact and request a trail burst.
pub fn wire_pointer_move(input: SharedInput) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&wnd);
        let cx = ev.client_x() as f32;
        let cy = ev.client_y() as f32;
        let ndc = client_to_ndc(cx, cy, w as f32, h as f32);
        input.borrow_mut().pointer_moved([cx, cy], ndc);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Each wheel event is one zoom tick; the frame driver uses the sign only.
pub fn wire_wheel(input: SharedInput) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        input.borrow_mut().wheel_ticked(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
