use crate::api::config::SceneConfig;
use crate::api::error::ConfigError;
use crate::components::color::Rgba;
use crate::components::particle::Particle;
use crate::input::pointer::PointerSample;
use crate::input::queue::{InputEvent, InputQueue};
use crate::math::{RandomSource, Vector2D};
use crate::renderer::surface::Surface;

/// The swirl scene: a fixed set of particles spawned at the surface centre,
/// plus the pointer sample they chase.
///
/// One call to [`Scene::frame`] per host refresh. Pointer updates between
/// frames overwrite each other; the next frame sees only the latest.
pub struct Scene {
    config: SceneConfig,
    fade: Rgba,
    size: Vector2D,
    particles: Vec<Particle>,
    pointer: PointerSample,
    frame_count: u64,
}

impl Scene {
    /// Validate `config` and spawn `config.particle.amount` particles at the
    /// centre of a `width` × `height` surface.
    pub fn new<R: RandomSource + ?Sized>(
        config: SceneConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let fade = config.fade_color()?;

        let center = Vector2D::new(width / 2.0, height / 2.0);
        let particles: Vec<Particle> = (0..config.particle.amount)
            .map(|_| Particle::new(center, &config.particle, rng))
            .collect();

        log::info!(
            "scene: {} particles on {}x{} surface, fade {}",
            particles.len(),
            width,
            height,
            fade.to_css()
        );

        Ok(Self {
            config,
            fade,
            size: Vector2D::new(width, height),
            particles,
            pointer: PointerSample::new(),
            frame_count: 0,
        })
    }

    /// Paint one frame: fade the whole surface, then draw and update every particle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(Vector2D::ZERO, self.size.width(), self.size.height(), self.fade);

        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.draw(surface);
            particle.update(&pointer);
        }
        self.frame_count += 1;
    }

    /// Record a pointer position in surface coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.set(x, y);
    }

    /// The pointer left the surface.
    pub fn pointer_leave(&mut self) {
        log::debug!("scene: pointer left surface");
        self.pointer.clear();
    }

    /// Apply every queued event in arrival order.
    pub fn apply_input(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            match event {
                InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
                InputEvent::PointerLeave => self.pointer_leave(),
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerSample {
        &self.pointer
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Surface size fixed at startup.
    pub fn size(&self) -> Vector2D {
        self.size
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
