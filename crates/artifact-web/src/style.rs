use artifact_core::FloatingGlyph;

/// CSS color string for a particle fill.
#[inline]
pub fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

/// Inline style properties for a floating glyph node.
pub fn glyph_style(glyph: &FloatingGlyph) -> [(&'static str, String); 4] {
    [
        ("left", format!("{:.3}%", glyph.left_percent)),
        ("animation-duration", format!("{:.3}s", glyph.duration_sec)),
        ("animation-delay", format!("{:.3}s", glyph.delay_sec)),
        ("font-size", format!("{:.1}px", glyph.font_px)),
    ]
}

/// Backing-store pixel size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}
