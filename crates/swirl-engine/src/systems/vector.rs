//! Lyon-based tessellating surface.
//!
//! Turns the scene's fade fill and particle strokes into a flat RGBA triangle
//! list for a WebGPU host, instead of replaying them on a Canvas2D.
//!
//! # Usage
//!
//! ```ignore
//! let mut surface = TessellatedSurface::new();
//! surface.clear();
//! scene.frame(&mut surface);
//! upload(surface.buffer(), surface.vertex_count());
//! ```

use bytemuck::{Pod, Zeroable};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::components::color::{Hsl, Rgba};
use crate::math::Vector2D;
use crate::renderer::surface::{LineStyle, Surface};

/// Per-vertex data for tessellated rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color in 0.0-1.0, as written into vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<Rgba> for VectorColor {
    fn from(color: Rgba) -> Self {
        let [r, g, b, a] = color.to_unit();
        Self { r, g, b, a }
    }
}

impl From<Hsl> for VectorColor {
    fn from(color: Hsl) -> Self {
        let [r, g, b] = color.to_rgb();
        Self { r, g, b, a: 1.0 }
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Surface that tessellates every call into a triangle list.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared each frame and populated by the scene.
pub struct TessellatedSurface {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl TessellatedSurface {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for the host to copy out).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }
}

impl Default for TessellatedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TessellatedSurface {
    fn fill_rect(&mut self, origin: Vector2D, width: f64, height: f64, color: Rgba) {
        if !origin.is_finite() || !(width > 0.0 && height > 0.0) {
            return;
        }
        let (x, y) = (origin.x as f32, origin.y as f32);
        let (w, h) = (width as f32, height as f32);

        let mut builder = Path::builder();
        builder.begin(point(x, y));
        builder.line_to(point(x + w, y));
        builder.line_to(point(x + w, y + h));
        builder.line_to(point(x, y + h));
        builder.close();
        let path = builder.build();

        self.fill_path(&path, color.into());
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, style: &LineStyle) {
        // A particle can hold a non-finite position; lyon must never see it.
        if !from.is_finite() || !to.is_finite() || !(style.width > 0.0) {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(from.x as f32, from.y as f32));
        builder.line_to(point(to.x as f32, to.y as f32));
        builder.end(false); // open path
        let path = builder.build();

        self.stroke_path(&path, style.width as f32, style.color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    fn style(width: f64) -> LineStyle {
        LineStyle { color: Hsl::new(0.0, 100.0, 50.0), width }
    }

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn vector_color_conversions() {
        let c = VectorColor::from(Rgba::new(255, 0, 0, 51));
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.2).abs() < 1e-6);

        let c = VectorColor::from(Hsl::new(240.0, 100.0, 50.0));
        assert!((c.b - 1.0).abs() < 1e-4);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn fill_rect_produces_two_triangles() {
        let mut surface = TessellatedSurface::new();
        surface.fill_rect(Vector2D::ZERO, 100.0, 50.0, Rgba::new(0x33, 0x33, 0x33, 30));
        assert_eq!(surface.vertex_count(), 6);
        assert!((surface.buffer()[5] - 30.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn stroke_line_produces_vertices() {
        let mut surface = TessellatedSurface::new();
        surface.stroke_line(Vector2D::ZERO, Vector2D::new(100.0, 100.0), &style(5.0));
        assert!(surface.vertex_count() > 0);
        assert_eq!(surface.vertex_count() % 3, 0);
    }

    #[test]
    fn non_finite_input_is_skipped() {
        let mut surface = TessellatedSurface::new();
        surface.stroke_line(Vector2D::splat(f64::NAN), Vector2D::ZERO, &style(2.0));
        surface.stroke_line(Vector2D::ZERO, Vector2D::new(10.0, 0.0), &style(0.0));
        surface.fill_rect(Vector2D::ZERO, 0.0, 10.0, Rgba::new(0, 0, 0, 255));
        assert_eq!(surface.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut surface = TessellatedSurface::new();
        surface.fill_rect(Vector2D::ZERO, 100.0, 50.0, Rgba::new(0, 0, 255, 255));
        assert!(surface.vertex_count() > 0);

        surface.clear();
        assert_eq!(surface.vertex_count(), 0);
    }
}
