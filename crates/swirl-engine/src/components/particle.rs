//! A particle orbiting a smoothed chase point.
//!
//! Each update the chase point (`last_mouse_position`) moves a fixed fraction
//! of the way toward the pointer, the orbital phase advances, and the particle
//! sits on a circle of radius `radius_factor` around the chase point. Each draw
//! strokes the segment travelled during the previous update.

use crate::api::config::ParticleConfig;
use crate::components::color::Hsl;
use crate::input::pointer::PointerSample;
use crate::math::{random_float, random_int, RandomSource, Vector2D};
use crate::renderer::surface::{LineStyle, Surface};

/// Stroke saturation, percent.
pub const SATURATION: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct Particle {
    /// Current drawable location.
    pub position: Vector2D,
    /// Value `position` held before the most recent update; start of the next stroke.
    pub last_position: Vector2D,
    /// Smoothed pursuit target the particle orbits.
    pub last_mouse_position: Vector2D,
    /// `(radius_factor, radius_factor)`, scaled per axis by cos/sin of `angle`.
    /// Never mutated after spawn.
    pub velocity: Vector2D,
    pub radius_factor: i64,
    /// Orbital phase in radians. Only ever increases for non-negative settings.
    pub angle: f64,
    /// Unbounded; reduced mod 360 by whoever renders it.
    pub hue: f64,
    pub lightness: f64,
    pub line_width: f64,
    config: ParticleConfig,
}

impl Particle {
    /// Spawn at `position`, drawing the per-particle values from `rng` in a
    /// fixed order: radius factor, angle, hue, lightness, line width.
    pub fn new<R: RandomSource + ?Sized>(
        position: Vector2D,
        config: &ParticleConfig,
        rng: &mut R,
    ) -> Self {
        let radius_factor = random_int(rng, config.factor.inner as f64, config.factor.outer as f64);
        // Integer draw: the phase starts on a whole radian in 0..=6.
        let angle = random_int(rng, 0.0, std::f64::consts::TAU) as f64;
        let hue = random_int(rng, config.color.hue.min, config.color.hue.max) as f64;
        let lightness =
            random_int(rng, config.color.lightness.min, config.color.lightness.max) as f64;
        let line_width = random_float(rng, config.line_width.min, config.line_width.max);

        Self {
            position,
            last_position: position,
            last_mouse_position: position,
            velocity: Vector2D::splat(radius_factor as f64),
            radius_factor,
            angle,
            hue,
            lightness,
            line_width,
            config: *config,
        }
    }

    /// Advance one step toward `pointer`.
    pub fn update(&mut self, pointer: &PointerSample) {
        self.last_position.copy_from(self.position);
        self.angle += self.radius_factor as f64 * self.config.rotation_speed;

        let pointer_vector = pointer.to_vector();
        let step = pointer_vector
            .subtract(self.last_mouse_position)
            .multiply_scalar(self.config.follow_speed);
        // An absent pointer reads as the origin, so this also skips the step
        // when there is no pointer. A pointer exactly at (0, 0) is ignored too.
        if pointer_vector.length() != 0.0 {
            self.last_mouse_position.add_in_place(step);
        }

        let (sin, cos) = self.angle.sin_cos();
        let orbital_offset = self.velocity.multiply_scalar_xy(cos, sin);
        let next = self.last_mouse_position.add(orbital_offset);
        self.position.copy_from(next);
    }

    /// Shift the hue and stroke the last travelled segment.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.hue += self.config.changing_hue_speed;
        surface.stroke_line(self.last_position, self.position, &self.line_style());
    }

    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            color: Hsl::new(self.hue, SATURATION, self.lightness),
            width: self.line_width,
        }
    }
}
