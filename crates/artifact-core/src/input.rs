//! Input recorded by event handlers and drained once per frame.
//!
//! Handlers only ever write here; the frame driver is the single place that
//! turns these requests into scene and particle changes.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedInput = Rc<RefCell<InputState>>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    /// Latest pointer position in normalized device coords (y up).
    pub pointer_ndc: Option<[f32; 2]>,
    /// Raw wheel deltas in arrival order; only the sign is used.
    pub wheel: SmallVec<[f32; 4]>,
    /// Pointer positions (overlay CSS pixels) that each request a trail burst.
    pub trail: SmallVec<[[f32; 2]; 8]>,
    /// Most recent viewport size, if it changed since the last frame.
    pub viewport: Option<(u32, u32)>,
}

impl InputState {
    pub fn shared() -> SharedInput {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn pointer_moved(&mut self, client: [f32; 2], ndc: [f32; 2]) {
        self.pointer_ndc = Some(ndc);
        self.trail.push(client);
    }

    pub fn wheel_ticked(&mut self, delta_y: f32) {
        self.wheel.push(delta_y);
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
    }

    /// Move everything recorded so far out, leaving the state empty.
    pub fn take(&mut self) -> InputState {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.pointer_ndc.is_none()
            && self.wheel.is_empty()
            && self.trail.is_empty()
            && self.viewport.is_none()
    }
}

/// Map client pixel coordinates to normalized device coordinates in [-1, 1].
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    [
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    ]
}
