//! DOM side of the floating glyphs: node creation, the spawn interval and
//! removal on `animationend`.

use crate::style::glyph_style;
use artifact_core::{FloatingGlyph, GlyphContainer, GlyphId, GlyphSpawner};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSpawner = Rc<RefCell<GlyphSpawner<DomGlyphContainer>>>;

pub struct DomGlyphContainer {
    document: web::Document,
    root: web::Element,
}

impl DomGlyphContainer {
    pub fn new(document: web::Document, root: web::Element) -> Self {
        Self { document, root }
    }
}

impl GlyphContainer for DomGlyphContainer {
    type Node = web::HtmlElement;

    fn append(&mut self, glyph: &FloatingGlyph) -> anyhow::Result<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        el.set_class_name("float-text");
        el.set_text_content(Some(&glyph.glyph.to_string()));
        let style = el.style();
        for (prop, value) in glyph_style(glyph) {
            style
                .set_property(prop, &value)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        self.root
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(el)
    }

    fn remove(&mut self, node: web::HtmlElement) {
        node.remove();
    }
}

/// Spawn one glyph and arrange for it to be removed when its animation ends.
pub fn spawn_glyph(spawner: &SharedSpawner) {
    let Some(id) = spawner.borrow_mut().spawn() else {
        return;
    };
    attach_completion(spawner, id);
}

fn attach_completion(spawner: &SharedSpawner, id: GlyphId) {
    let s = spawner.clone();
    let on_end = Closure::once_into_js(move || {
        s.borrow_mut().complete(id);
    });
    if let Some(node) = spawner.borrow().node(id) {
        _ = node.add_event_listener_with_callback("animationend", on_end.unchecked_ref());
    }
}

/// Initial burst plus the fixed-interval timer. Runs for the page lifetime.
pub fn start(spawner: &SharedSpawner) -> anyhow::Result<()> {
    let (startup, interval_ms) = {
        let s = spawner.borrow();
        (s.params().startup_count, s.params().interval_ms)
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let s = spawner.clone();
    let tick = Closure::wrap(Box::new(move || {
        spawn_glyph(&s);
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    tick.forget();

    for _ in 0..startup {
        spawn_glyph(spawner);
    }
    log::info!("[glyphs] {} startup glyphs, one every {} ms", startup, interval_ms);
    Ok(())
}
