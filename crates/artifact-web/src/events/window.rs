use crate::dom;
use artifact_core::SharedInput;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep both drawing surfaces sized to the viewport and queue the new size
/// for the camera.
pub fn wire_resize(
    input: SharedInput,
    scene_canvas: web::HtmlCanvasElement,
    particle_canvas: web::HtmlCanvasElement,
) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&wnd);
        dom::sync_canvas_backing_size(&scene_canvas);
        dom::size_canvas_to_viewport(&particle_canvas, w, h);
        input.borrow_mut().resized(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
