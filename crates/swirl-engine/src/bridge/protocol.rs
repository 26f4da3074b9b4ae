/// Draw buffer layout shared with the host page.
/// Must stay in sync with the host's reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Records: record_count × 9 floats]
/// ```
///
/// Each record is `kind` followed by 8 payload floats:
/// ```text
/// fill: x, y, width, height, r, g, b, a      (color channels 0.0-1.0)
/// line: x0, y0, x1, y1, hue, saturation, lightness, line_width
/// ```
///
/// Records appear in paint order: the fade fill first, then one line per particle.

use crate::api::config::SceneConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_SURFACE_WIDTH: usize = 2;
pub const HEADER_SURFACE_HEIGHT: usize = 3;
pub const HEADER_MAX_RECORDS: usize = 4;
pub const HEADER_RECORD_COUNT: usize = 5;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw record: kind + 8 payload floats (fixed wire format).
pub const RECORD_FLOATS: usize = 9;

/// Record kind tags.
pub const RECORD_KIND_FILL: f32 = 0.0;
pub const RECORD_KIND_LINE: f32 = 1.0;

/// Runtime-computed buffer layout, sized from the particle count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum draw records per frame.
    pub max_records: usize,
    /// Size of record data section in floats.
    pub record_data_floats: usize,
    /// Offset (in floats) where record data begins.
    pub record_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_records: usize) -> Self {
        let record_data_floats = max_records * RECORD_FLOATS;
        let record_data_offset = HEADER_FLOATS;
        let buffer_total_floats = record_data_offset + record_data_floats;

        Self {
            max_records,
            record_data_floats,
            record_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// One fade fill plus one line per particle.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.particle.amount + 1)
    }
}
