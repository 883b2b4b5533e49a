use std::fmt;

/// Rejected recipe or canvas parameters.
///
/// Raised while a recipe is being built, never during rendering: a recipe
/// that exists is always renderable.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate, size or radius is NaN or infinite.
    NonFinite { shape: &'static str },
    /// Width or height is negative.
    NegativeSize { shape: &'static str, width: f64, height: f64 },
    /// Corner radius outside `[0, min(w, h) / 2]`.
    CornerRadiusOutOfRange { radius: f64, max: f64 },
    /// Disc radius is negative.
    NegativeRadius { radius: f64 },
    /// Disc inner radius outside `[0, radius]`.
    InnerRadiusOutOfRange { inner: f64, radius: f64 },
    /// Canvas width or height is zero.
    ZeroCanvas { width: u32, height: u32 },
    /// Layer `layer` refers to layer `target`, which it may not.
    InvalidLayerRef { layer: usize, target: usize, reason: &'static str },
    /// Layer `layer` sets alpha in a recipe whose layout has no alpha channel.
    AlphaWithoutChannel { layer: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonFinite { shape } => {
                write!(f, "{shape}: parameters must be finite")
            }
            GeometryError::NegativeSize { shape, width, height } => {
                write!(f, "{shape}: negative size {width}x{height}")
            }
            GeometryError::CornerRadiusOutOfRange { radius, max } => {
                write!(f, "rounded rect: corner radius {radius} outside [0, {max}]")
            }
            GeometryError::NegativeRadius { radius } => {
                write!(f, "disc: negative radius {radius}")
            }
            GeometryError::InnerRadiusOutOfRange { inner, radius } => {
                write!(f, "disc: inner radius {inner} outside [0, {radius}]")
            }
            GeometryError::ZeroCanvas { width, height } => {
                write!(f, "canvas must be non-empty (got {width}x{height})")
            }
            GeometryError::InvalidLayerRef { layer, target, reason } => {
                write!(f, "layer {layer} cannot reference layer {target}: {reason}")
            }
            GeometryError::AlphaWithoutChannel { layer } => {
                write!(f, "layer {layer} sets alpha but the recipe is RGB")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
