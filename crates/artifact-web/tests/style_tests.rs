// Host-side tests for pure DOM formatting helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use artifact_core::FloatingGlyph;
use style::*;

#[test]
fn particle_fill_is_css_rgba() {
    assert_eq!(rgba_css([192, 168, 110], 0.5), "rgba(192, 168, 110, 0.5)");
    assert_eq!(rgba_css([1, 2, 3], -0.2), "rgba(1, 2, 3, 0)");
}

#[test]
fn glyph_style_carries_units() {
    let g = FloatingGlyph {
        glyph: '鼎',
        left_percent: 42.5,
        duration_sec: 7.25,
        delay_sec: 0.5,
        font_px: 28.0,
    };
    let props = glyph_style(&g);
    assert_eq!(props[0], ("left", "42.500%".to_string()));
    assert_eq!(props[1], ("animation-duration", "7.250s".to_string()));
    assert_eq!(props[2], ("animation-delay", "0.500s".to_string()));
    assert_eq!(props[3], ("font-size", "28.0px".to_string()));
}

#[test]
fn backing_size_scales_by_dpr_and_never_hits_zero() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
}
