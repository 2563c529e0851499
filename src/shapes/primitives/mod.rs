pub mod circle;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod solids;

pub use circle::{
    ArcOptions, CircleOptions, DotOptions, EllipseOptions, create_arc, create_circle, create_dot,
    create_ellipse,
};
pub use line::create_line;
pub use polygon::{create_polygon, create_regular_polygon, create_triangle};
pub use rect::{
    RectOptions, RoundedRectOptions, SquareOptions, create_rect, create_rounded_rect,
    create_square,
};
pub use solids::{ConeOptions, CylinderOptions, create_cone, create_cylinder};
