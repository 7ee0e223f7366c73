#![cfg(target_arch = "wasm32")]
use artifact_core::{
    FrameDriver, GlyphSpawner, InputState, LoadSlot, ShowcaseConfig, Showcase,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod glyphs;
mod loader;
mod overlay;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("artifact-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = ShowcaseConfig::default();

    let scene_canvas: web::HtmlCanvasElement = dom::query(&document, "#artifact-canvas")?;
    let particle_canvas: web::HtmlCanvasElement = dom::query(&document, ".particles")?;
    let glyph_root: web::Element = dom::query(&document, ".floating-container")?;

    let (vw, vh) = dom::viewport_size(&window);
    dom::sync_canvas_backing_size(&scene_canvas);
    dom::size_canvas_to_viewport(&particle_canvas, vw, vh);

    // Handlers write here; the frame driver drains it once per frame.
    let input = InputState::shared();
    events::wire_pointer_move(input.clone());
    events::wire_wheel(input.clone());
    events::wire_resize(input.clone(), scene_canvas.clone(), particle_canvas.clone());

    let load: LoadSlot = Rc::new(RefCell::new(None));
    loader::spawn_artifact_load(config.model_path, load.clone());

    let spawner = Rc::new(RefCell::new(GlyphSpawner::new(
        glyphs::DomGlyphContainer::new(document.clone(), glyph_root),
        config.glyphs,
    )));
    glyphs::start(&spawner)?;

    let gpu = frame::init_gpu(&scene_canvas).await;
    let aspect = vw.max(1) as f32 / vh.max(1) as f32;
    let driver = FrameDriver::new(Showcase::new(&config, aspect), input, load);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        gpu,
        particles: overlay::CanvasParticleSurface::new(particle_canvas)?,
        scene_canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
