//! Shape components and primitive constructors.
//!
//! - Shape: geometry + paint style (+ optional text label)
//! - Style: fill/stroke paint and the stock palette
//! - primitives: `create_*` constructors for rects, circles, polygons,
//!   lines and the spatial solids

pub mod primitives;
pub mod shape;
pub mod style;

pub use shape::{Label, Shape, ShapeGeometry};
pub use style::{Style, parse_hex};
