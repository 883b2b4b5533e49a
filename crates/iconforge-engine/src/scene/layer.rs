use crate::paint::Color;

use super::Shape;

/// Handle to a layer within one recipe, in paint order.
///
/// Returned by the recipe builder so later layers can refer back to an
/// earlier one (subtract pairing, clipping).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(crate) usize);

impl LayerId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a layer does to pixels inside its shape.
///
/// A layer "takes effect" on a pixel when its shape contains the pixel and
/// its own condition holds (`clip` layer took effect / paired paint layer
/// took effect). Layers that did not take effect leave the pixel untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LayerOp {
    /// Overwrite the color channels; alpha only when `alpha` is set.
    Paint {
        color: Color,
        alpha: Option<u8>,
        /// Restrict to pixels where this earlier layer took effect.
        clip: Option<LayerId>,
    },
    /// Punch a hole in an earlier paint layer: restore the pixel it held
    /// right before that layer was applied.
    Subtract { from: LayerId },
}

impl LayerOp {
    /// Unclipped paint that keeps the current alpha.
    #[inline]
    pub const fn paint(color: Color) -> Self {
        LayerOp::Paint { color, alpha: None, clip: None }
    }

    #[inline]
    pub const fn is_paint(&self) -> bool {
        matches!(self, LayerOp::Paint { .. })
    }
}

/// One recipe entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layer {
    pub shape: Shape,
    pub op: LayerOp,
}
