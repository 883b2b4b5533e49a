use crate::coords::Vec2;
use crate::paint::{ChannelLayout, Pixel};
use crate::scene::{Layer, LayerOp, Recipe};

use super::{Canvas, RasterBuffer};

/// Rasterizes `recipe` onto `canvas`.
///
/// Pixels are visited in row-major order and sampled at their integer
/// coordinates. Output depends only on the inputs.
pub fn render(canvas: Canvas, recipe: &Recipe) -> RasterBuffer {
    let layout = recipe.layout();
    let channels = layout.channels();
    let background = recipe.background();

    let outside: Pixel = match layout {
        ChannelLayout::Rgba => [0, 0, 0, 0],
        ChannelLayout::Rgb => background.fill.opaque(),
    };

    let mut data = Vec::with_capacity(canvas.pixel_count() * channels);
    let mut effects = LayerEffects::new(recipe.layers().len());

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let p = Vec2::new(x as f64, y as f64);
            let px = if background.shape.contains(p) {
                effects.reset();
                composite(p, background.fill.opaque(), recipe.layers(), &mut effects)
            } else {
                outside
            };
            data.extend_from_slice(&px[..channels]);
        }
    }

    log::debug!(
        "render: {}x{} {:?}, {} layers",
        canvas.width(),
        canvas.height(),
        layout,
        recipe.layers().len()
    );
    RasterBuffer::from_parts(canvas.width(), canvas.height(), layout, data)
}

/// Per-pixel record of which layers took effect and what was beneath them.
///
/// Slot `i` holds the pixel value just before layer `i` was applied, or
/// `None` if layer `i` did not take effect on the current pixel. Reused
/// across pixels.
struct LayerEffects {
    before: Vec<Option<Pixel>>,
}

impl LayerEffects {
    fn new(len: usize) -> Self {
        Self { before: vec![None; len] }
    }

    #[inline]
    fn reset(&mut self) {
        self.before.fill(None);
    }

    #[inline]
    fn took_effect(&self, index: usize) -> bool {
        self.before[index].is_some()
    }
}

/// Applies `layers` back-to-front to a pixel seeded with `base`.
fn composite(p: Vec2, base: Pixel, layers: &[Layer], effects: &mut LayerEffects) -> Pixel {
    let mut px = base;

    for (i, layer) in layers.iter().enumerate() {
        if !layer.shape.contains(p) {
            continue;
        }
        match layer.op {
            LayerOp::Paint { color, alpha, clip } => {
                if clip.is_some_and(|c| !effects.took_effect(c.index())) {
                    continue;
                }
                effects.before[i] = Some(px);
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
                if let Some(a) = alpha {
                    px[3] = a;
                }
            }
            LayerOp::Subtract { from } => {
                // Only cuts where the paired layer actually painted.
                if let Some(beneath) = effects.before[from.index()] {
                    effects.before[i] = Some(px);
                    px = beneath;
                }
            }
        }
    }

    px
}
