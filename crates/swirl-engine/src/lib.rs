pub mod api;
pub mod core;
pub mod components;
pub mod math;
pub mod renderer;
pub mod systems;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{SceneConfig, SceneStyle, ParticleConfig, FactorRange, ColorRange, Range};
pub use api::error::ConfigError;
pub use components::color::{Hsl, Rgba};
pub use components::particle::Particle;
pub use core::scene::Scene;
pub use math::{Vector2D, Rng, RandomSource, random_int, random_float};
pub use input::pointer::{PointerSample, SurfaceRect, to_surface_coords};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::surface::{Surface, LineStyle};
pub use renderer::draw_list::{DrawList, DrawCommand, DrawRecord};
pub use bridge::protocol::ProtocolLayout;

#[cfg(feature = "vectors")]
pub use systems::vector::{TessellatedSurface, VectorVertex, VectorColor};
