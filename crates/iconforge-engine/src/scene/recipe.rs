use crate::paint::{ChannelLayout, Color};

use super::{GeometryError, Layer, LayerId, LayerOp, Shape};

/// Base region of an icon and its fill.
///
/// Pixels outside `shape` get the "outside" value (transparent for RGBA,
/// `fill` for RGB); pixels inside start as opaque `fill`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Background {
    pub shape: Shape,
    pub fill: Color,
}

/// Complete, validated description of one icon at one size.
///
/// Built with [`Recipe::builder`]; every shape and layer reference has been
/// checked by the time a `Recipe` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    layout: ChannelLayout,
    background: Background,
    layers: Vec<Layer>,
}

impl Recipe {
    /// Starts a recipe with the given channel layout and background.
    pub fn builder(
        layout: ChannelLayout,
        background: impl Into<Shape>,
        fill: Color,
    ) -> Result<RecipeBuilder, GeometryError> {
        let shape = background.into();
        shape.validate()?;
        Ok(RecipeBuilder {
            layout,
            background: Background { shape, fill },
            layers: Vec::new(),
        })
    }

    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Layers in paint order (back-to-front).
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

/// Incremental recipe construction.
///
/// Every `push`/`paint`/`subtract` validates its arguments immediately, so a
/// bad parameter is reported at the call that introduced it.
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    layout: ChannelLayout,
    background: Background,
    layers: Vec<Layer>,
}

impl RecipeBuilder {
    /// Appends a layer and returns its handle.
    ///
    /// References (`clip`, `from`) must point at earlier layers; `from` must
    /// additionally be a paint layer. Paint alpha needs an RGBA layout.
    pub fn push(&mut self, shape: impl Into<Shape>, op: LayerOp) -> Result<LayerId, GeometryError> {
        let shape = shape.into();
        shape.validate()?;

        let index = self.layers.len();
        if let LayerOp::Paint { alpha: Some(_), .. } = op {
            if !self.layout.has_alpha() {
                return Err(GeometryError::AlphaWithoutChannel { layer: index });
            }
        }
        match op {
            LayerOp::Paint { clip: Some(clip), .. } => self.check_earlier(index, clip)?,
            LayerOp::Paint { clip: None, .. } => {}
            LayerOp::Subtract { from } => {
                self.check_earlier(index, from)?;
                if !self.layers[from.0].op.is_paint() {
                    return Err(GeometryError::InvalidLayerRef {
                        layer: index,
                        target: from.0,
                        reason: "subtract must pair with a paint layer",
                    });
                }
            }
        }

        self.layers.push(Layer { shape, op });
        Ok(LayerId(index))
    }

    /// Opaque paint over whatever is beneath.
    #[inline]
    pub fn paint(&mut self, shape: impl Into<Shape>, color: Color) -> Result<LayerId, GeometryError> {
        self.push(shape, LayerOp::paint(color))
    }

    /// Paint restricted to pixels where `clip` took effect.
    #[inline]
    pub fn paint_within(
        &mut self,
        shape: impl Into<Shape>,
        color: Color,
        clip: LayerId,
    ) -> Result<LayerId, GeometryError> {
        self.push(shape, LayerOp::Paint { color, alpha: None, clip: Some(clip) })
    }

    /// Cut `shape` out of the paint layer `from`.
    #[inline]
    pub fn subtract(
        &mut self,
        shape: impl Into<Shape>,
        from: LayerId,
    ) -> Result<LayerId, GeometryError> {
        self.push(shape, LayerOp::Subtract { from })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn build(self) -> Recipe {
        Recipe {
            layout: self.layout,
            background: self.background,
            layers: self.layers,
        }
    }

    fn check_earlier(&self, index: usize, target: LayerId) -> Result<(), GeometryError> {
        if target.0 >= index {
            return Err(GeometryError::InvalidLayerRef {
                layer: index,
                target: target.0,
                reason: "references must point at an earlier layer",
            });
        }
        Ok(())
    }
}
