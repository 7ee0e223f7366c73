use crate::style;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (
        read(window.inner_width()) as u32,
        read(window.inner_height()) as u32,
    )
}

/// Find the first element matching `selector` and cast it to `T`.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = style::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Size a canvas to the viewport in CSS pixels, so pointer client coordinates
/// map 1:1 onto it.
pub fn size_canvas_to_viewport(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}
