use crate::math::Vector2D;

/// The most recent pointer position in surface coordinates, or nothing if the
/// pointer has not entered the surface yet or has left it.
///
/// Written by input handling, read by every particle update in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    position: Option<Vector2D>,
}

impl PointerSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Some(Vector2D::new(x, y)),
        }
    }

    /// Overwrite the sample. Later writes win.
    pub fn set(&mut self, x: f64, y: f64) {
        self.position = Some(Vector2D::new(x, y));
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vector2D> {
        self.position
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }

    /// Vector handed to particle pursuit. An absent sample reads as `(0, 0)`.
    pub fn to_vector(&self) -> Vector2D {
        self.position.unwrap_or_default()
    }
}

/// Bounding box of the surface element in client (device) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Map a client-space point into surface pixel space, accounting for the
/// element's offset and any CSS scaling between its box and its pixel size.
pub fn to_surface_coords(client: Vector2D, rect: &SurfaceRect, surface_size: Vector2D) -> Vector2D {
    Vector2D::new(
        (client.x - rect.left) / (rect.right - rect.left) * surface_size.width(),
        (client.y - rect.top) / (rect.bottom - rect.top) * surface_size.height(),
    )
}
