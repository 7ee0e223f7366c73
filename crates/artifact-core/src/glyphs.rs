//! Floating decorative glyphs.
//!
//! Each glyph is a one-shot node: it is appended to a container with randomized
//! position and animation timing, and removed again when the host reports that
//! its animation finished. Nothing here runs per frame.

use crate::config::GlyphParams;
use crate::constants::GLYPH_SET;
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type GlyphId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingGlyph {
    pub glyph: char,
    /// Horizontal position as a percentage of the container width.
    pub left_percent: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub font_px: f32,
}

impl FloatingGlyph {
    pub fn random<R: Rng + ?Sized>(params: &GlyphParams, rng: &mut R) -> Self {
        Self {
            glyph: GLYPH_SET[rng.gen_range(0..GLYPH_SET.len())],
            left_percent: rng.gen_range(0.0..100.0),
            duration_sec: rng.gen_range(params.duration_sec.0..params.duration_sec.1),
            delay_sec: rng.gen_range(params.delay_sec.0..params.delay_sec.1),
            font_px: rng.gen_range(params.font_px.0..params.font_px.1),
        }
    }
}

/// Where glyph nodes live (a DOM element on the web). Append/remove only.
pub trait GlyphContainer {
    type Node;
    fn append(&mut self, glyph: &FloatingGlyph) -> anyhow::Result<Self::Node>;
    fn remove(&mut self, node: Self::Node);
}

pub struct GlyphSpawner<C: GlyphContainer> {
    container: C,
    params: GlyphParams,
    rng: StdRng,
    live: FnvHashMap<GlyphId, C::Node>,
    next_id: GlyphId,
}

impl<C: GlyphContainer> GlyphSpawner<C> {
    pub fn new(container: C, params: GlyphParams) -> Self {
        Self::with_rng(container, params, StdRng::from_entropy())
    }

    pub fn with_rng(container: C, params: GlyphParams, rng: StdRng) -> Self {
        Self {
            container,
            params,
            rng,
            live: FnvHashMap::default(),
            next_id: 0,
        }
    }

    /// Create one glyph. Returns `None` if the container refused the node.
    pub fn spawn(&mut self) -> Option<GlyphId> {
        let glyph = FloatingGlyph::random(&self.params, &mut self.rng);
        match self.container.append(&glyph) {
            Ok(node) => {
                let id = self.next_id;
                self.next_id += 1;
                self.live.insert(id, node);
                Some(id)
            }
            Err(e) => {
                log::warn!("[glyphs] could not append glyph: {:?}", e);
                None
            }
        }
    }

    /// Initial burst shown before the first interval tick.
    pub fn spawn_startup(&mut self) -> Vec<GlyphId> {
        (0..self.params.startup_count)
            .filter_map(|_| self.spawn())
            .collect()
    }

    /// Animation for `id` ended: drop its node. Returns false for unknown ids.
    pub fn complete(&mut self, id: GlyphId) -> bool {
        match self.live.remove(&id) {
            Some(node) => {
                self.container.remove(node);
                true
            }
            None => false,
        }
    }

    pub fn node(&self, id: GlyphId) -> Option<&C::Node> {
        self.live.get(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn params(&self) -> &GlyphParams {
        &self.params
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}
