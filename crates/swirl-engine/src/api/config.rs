use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::components::color::Rgba;

/// Full scene configuration. Supplied once at startup, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub scene: SceneStyle,
    pub particle: ParticleConfig,
}

/// Background fade painted over the whole surface each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Base color as `#rrggbb`.
    pub color: String,
    /// Fade alpha, 0-255. Lower values leave longer trails.
    pub alpha: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            color: "#333333".into(),
            alpha: 30,
        }
    }
}

/// Spawn ranges and motion parameters shared by every particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Number of particles spawned at startup.
    pub amount: usize,
    /// Range the per-particle radius factor is drawn from.
    pub factor: FactorRange,
    /// Fraction of the remaining distance to the pointer covered per update.
    pub follow_speed: f64,
    /// Orbital phase advance per update, per unit of radius factor.
    pub rotation_speed: f64,
    /// Hue added on every draw.
    pub changing_hue_speed: f64,
    pub color: ColorRange,
    pub line_width: Range,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            amount: 50,
            factor: FactorRange { inner: 20, outer: 120 },
            follow_speed: 0.05,
            rotation_speed: 0.0005,
            changing_hue_speed: 0.5,
            color: ColorRange {
                hue: Range::new(0.0, 50.0),
                lightness: Range::new(20.0, 90.0),
            },
            line_width: Range::new(2.0, 6.0),
        }
    }
}

/// Inner/outer bounds for the integer radius factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorRange {
    pub inner: i64,
    pub outer: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub hue: Range,
    pub lightness: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        // Written so a NaN bound is rejected too.
        if self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl SceneConfig {
    /// Parse and validate a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fade_color()?;

        let p = &self.particle;
        Range::new(p.factor.inner as f64, p.factor.outer as f64).check("particle.factor")?;
        p.color.hue.check("particle.color.hue")?;
        p.color.lightness.check("particle.color.lightness")?;
        p.line_width.check("particle.lineWidth")?;
        Ok(())
    }

    /// Scene base color combined with the scene alpha.
    pub fn fade_color(&self) -> Result<Rgba, ConfigError> {
        let alpha = u8::try_from(self.scene.alpha)
            .map_err(|_| ConfigError::AlphaOutOfRange(self.scene.alpha))?;
        let base = Rgba::from_hex(&self.scene.color)
            .ok_or_else(|| ConfigError::InvalidColor(self.scene.color.clone()))?;
        Ok(base.with_alpha(alpha))
    }
}
