//! Geometry shared by the grid queries and the flow placement.
//!
//! Logical pixels, origin top-left, +X right, +Y down.

mod edges;
mod rect;
mod vec2;

pub use edges::Edges;
pub use rect::Rect;
pub use vec2::Vec2;
