//! Scene description types.
//!
//! Responsibilities:
//! - shape primitives and their validation (`scene::shapes`)
//! - layers with paint / subtract semantics and explicit pairing
//! - recipes: background + ordered layers, validated at construction

mod error;
mod layer;
mod recipe;
mod shape;

pub mod shapes;

pub use error::GeometryError;
pub use layer::{Layer, LayerId, LayerOp};
pub use recipe::{Background, Recipe, RecipeBuilder};
pub use shape::Shape;
