use swirl_engine::{ColorRange, FactorRange, ParticleConfig, Range, SceneConfig, SceneStyle};

/// Fifty warm-hued particles over a dark grey fade.
pub fn swirl_config() -> SceneConfig {
    SceneConfig {
        scene: SceneStyle {
            color: "#333333".into(),
            alpha: 30,
        },
        particle: ParticleConfig {
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
        },
    }
}
