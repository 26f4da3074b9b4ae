pub mod surface;
pub mod draw_list;

// Re-export key types for convenient access
pub use surface::{Surface, LineStyle};
pub use draw_list::{DrawList, DrawCommand, DrawRecord};
