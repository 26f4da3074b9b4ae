//! The drawing surface contract.
//!
//! The scene only ever paints two things: a translucent fill over the whole
//! surface and straight stroked line segments. Backends implement this trait
//! to turn those calls into Canvas2D commands, GPU triangles, or anything else.

use crate::components::color::{Hsl, Rgba};
use crate::math::Vector2D;

/// Stroke parameters for one line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Hsl,
    pub width: f64,
}

pub trait Surface {
    /// Fill an axis-aligned rectangle, blending `color` over what is there.
    fn fill_rect(&mut self, origin: Vector2D, width: f64, height: f64, color: Rgba);

    /// Stroke a straight segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, style: &LineStyle);
}
