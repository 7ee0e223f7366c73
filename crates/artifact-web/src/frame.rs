use crate::overlay::CanvasParticleSurface;
use crate::render;
use artifact_core::{FrameDriver, SceneRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FrameDriver,
    pub gpu: Option<render::GpuState>,
    pub particles: CanvasParticleSurface,
    pub scene_canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.scene_canvas.width(), self.scene_canvas.height());
        }
        let renderer = self.gpu.as_mut().map(|g| g as &mut dyn SceneRenderer);
        self.driver.frame(renderer, &mut self.particles);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame for the page lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
