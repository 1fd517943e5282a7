//! Ball colours, stored as `0xRRGGBB`.

pub type Rgb = u32;

pub const PALETTE: [Rgb; 6] = [
    0xff8c42, // orange
    0xffd166, // yellow
    0x06d6a0, // green
    0x118ab2, // blue
    0x073b4c, // navy
    0xef476f, // pink
];

/// Amount used for the gradient highlight.
pub const HIGHLIGHT_AMOUNT: f32 = 0.18;

/// Brighten every channel by `round(255 * amount)`, saturating at 255.
pub fn lighten(color: Rgb, amount: f32) -> Rgb {
    let lift = (255.0 * amount).round().clamp(0.0, 255.0) as u32;
    let r = (((color >> 16) & 0xff) + lift).min(255);
    let g = (((color >> 8) & 0xff) + lift).min(255);
    let b = ((color & 0xff) + lift).min(255);
    (r << 16) | (g << 8) | b
}
