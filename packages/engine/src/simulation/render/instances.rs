use super::surface::{BallStyle, Surface};

/// Floats per ball: x, y, radius, base colour, highlight colour, stroke width.
///
/// Colours are `0xRRGGBB` stored as f32; 24 bits fit the mantissa exactly.
pub const INSTANCE_STRIDE: usize = 6;

/// Flat per-ball draw data read by JS straight out of wasm memory.
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    data: Vec<f32>,
    outline: Option<[f32; 3]>,
}

impl InstanceBuffer {
    pub fn with_capacity(balls: usize) -> Self {
        Self {
            data: Vec::with_capacity(balls * INSTANCE_STRIDE),
            outline: None,
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.outline = None;
    }

    /// Number of balls written
    pub fn count(&self) -> usize {
        self.data.len() / INSTANCE_STRIDE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Pointer to the packed data (valid until the next render)
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Length in f32 elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `[x, y, radius]` of the held-ball ring, if one was drawn
    pub fn outline(&self) -> Option<[f32; 3]> {
        self.outline
    }
}

impl Surface for InstanceBuffer {
    fn draw_ball(&mut self, x: f32, y: f32, radius: f32, style: &BallStyle) {
        self.data.extend_from_slice(&[
            x,
            y,
            radius,
            style.base as f32,
            style.highlight as f32,
            style.stroke_width,
        ]);
    }

    fn draw_outline(&mut self, x: f32, y: f32, radius: f32) {
        self.outline = Some([x, y, radius]);
    }
}
