pub(crate) mod band;
pub(crate) mod disc;
pub(crate) mod rounded_rect;
pub(crate) mod triangle;

pub use band::Band;
pub use disc::Disc;
pub use rounded_rect::RoundedRect;
pub use triangle::Triangle;

use crate::coords::Rect;

use super::GeometryError;

/// Shared rectangle checks for rect-based shapes.
pub(super) fn validate_rect(shape: &'static str, rect: Rect) -> Result<(), GeometryError> {
    if !rect.is_finite() {
        return Err(GeometryError::NonFinite { shape });
    }
    if rect.size.x < 0.0 || rect.size.y < 0.0 {
        return Err(GeometryError::NegativeSize {
            shape,
            width: rect.size.x,
            height: rect.size.y,
        });
    }
    Ok(())
}
