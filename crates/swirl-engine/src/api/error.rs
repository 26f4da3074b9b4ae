/// Errors raised while loading or validating a [`SceneConfig`](super::config::SceneConfig).
///
/// The per-frame path never fails; only startup configuration can.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse scene config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("Invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Scene alpha {0} is outside 0-255")]
    AlphaOutOfRange(u32),
}
