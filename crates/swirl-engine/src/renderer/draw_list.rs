use bytemuck::{Pod, Zeroable};

use super::surface::{LineStyle, Surface};
use crate::bridge::protocol::{
    ProtocolLayout, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_MAX_RECORDS,
    HEADER_PROTOCOL_VERSION, HEADER_RECORD_COUNT, HEADER_SURFACE_HEIGHT, HEADER_SURFACE_WIDTH,
    PROTOCOL_VERSION, RECORD_FLOATS, RECORD_KIND_FILL, RECORD_KIND_LINE,
};
use crate::components::color::Rgba;
use crate::math::Vector2D;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        origin: Vector2D,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Line {
        from: Vector2D,
        to: Vector2D,
        style: LineStyle,
    },
}

/// Wire form of a [`DrawCommand`]: 9 floats = 36 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DrawRecord {
    pub kind: f32,
    pub data: [f32; 8],
}

impl DrawRecord {
    pub const FLOATS: usize = RECORD_FLOATS;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&DrawCommand> for DrawRecord {
    fn from(command: &DrawCommand) -> Self {
        match command {
            DrawCommand::Fill { origin, width, height, color } => {
                let [r, g, b, a] = color.to_unit();
                DrawRecord {
                    kind: RECORD_KIND_FILL,
                    data: [
                        origin.x as f32,
                        origin.y as f32,
                        *width as f32,
                        *height as f32,
                        r,
                        g,
                        b,
                        a,
                    ],
                }
            }
            DrawCommand::Line { from, to, style } => DrawRecord {
                kind: RECORD_KIND_LINE,
                data: [
                    from.x as f32,
                    from.y as f32,
                    to.x as f32,
                    to.y as f32,
                    style.color.hue as f32,
                    style.color.saturation as f32,
                    style.color.lightness as f32,
                    style.width as f32,
                ],
            },
        }
    }
}

/// Surface that records calls for a host that does its own painting
/// (a Canvas2D page), and packs them into a flat float buffer it can read.
pub struct DrawList {
    commands: Vec<DrawCommand>,
    buffer: Vec<f32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_layout(&ProtocolLayout::new(64))
    }

    /// Pre-allocate for the given layout.
    pub fn with_layout(layout: &ProtocolLayout) -> Self {
        Self {
            commands: Vec::with_capacity(layout.max_records),
            buffer: Vec::with_capacity(layout.buffer_total_floats),
        }
    }

    /// Drop recorded commands. Call at the start of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Issue the recorded commands, in order, against another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Fill { origin, width, height, color } => {
                    target.fill_rect(*origin, *width, *height, *color)
                }
                DrawCommand::Line { from, to, style } => target.stroke_line(*from, *to, style),
            }
        }
    }

    /// Rebuild the wire buffer: header followed by one record per command.
    pub fn pack(&mut self, frame: u64, surface_size: Vector2D, layout: &ProtocolLayout) {
        self.buffer.clear();
        self.buffer.resize(HEADER_FLOATS, 0.0);
        self.buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        self.buffer[HEADER_FRAME_COUNTER] = frame as f32;
        self.buffer[HEADER_SURFACE_WIDTH] = surface_size.width() as f32;
        self.buffer[HEADER_SURFACE_HEIGHT] = surface_size.height() as f32;
        self.buffer[HEADER_MAX_RECORDS] = layout.max_records as f32;
        self.buffer[HEADER_RECORD_COUNT] = self.commands.len() as f32;

        for command in &self.commands {
            let record = DrawRecord::from(command);
            self.buffer.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&record)));
        }
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, origin: Vector2D, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::Fill { origin, width, height, color });
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, style: &LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style: *style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Hsl;
    use std::mem::size_of;

    fn style() -> LineStyle {
        LineStyle { color: Hsl::new(10.0, 100.0, 50.0), width: 3.0 }
    }

    #[test]
    fn draw_record_is_36_bytes() {
        assert_eq!(size_of::<DrawRecord>(), 36);
        assert_eq!(DrawRecord::STRIDE_BYTES, 36);
    }

    #[test]
    fn records_commands_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Vector2D::ZERO, 10.0, 10.0, Rgba::new(0, 0, 0, 30));
        list.stroke_line(Vector2D::ZERO, Vector2D::new(1.0, 1.0), &style());
        assert_eq!(list.len(), 2);
        assert_eq!(list.line_count(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn pack_writes_header_and_records() {
        let mut list = DrawList::new();
        list.fill_rect(Vector2D::ZERO, 800.0, 600.0, Rgba::new(255, 0, 0, 255));
        list.stroke_line(Vector2D::new(1.0, 2.0), Vector2D::new(3.0, 4.0), &style());
        let layout = ProtocolLayout::new(2);
        list.pack(7, Vector2D::new(800.0, 600.0), &layout);

        let buf = list.buffer();
        assert_eq!(buf.len(), layout.buffer_total_floats);
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(buf[HEADER_SURFACE_WIDTH], 800.0);
        assert_eq!(buf[HEADER_RECORD_COUNT], 2.0);

        let fill = &buf[HEADER_FLOATS..HEADER_FLOATS + RECORD_FLOATS];
        assert_eq!(fill, &[RECORD_KIND_FILL, 0.0, 0.0, 800.0, 600.0, 1.0, 0.0, 0.0, 1.0]);

        let line = &buf[HEADER_FLOATS + RECORD_FLOATS..];
        assert_eq!(line, &[RECORD_KIND_LINE, 1.0, 2.0, 3.0, 4.0, 10.0, 100.0, 50.0, 3.0]);
    }

    #[test]
    fn replay_reissues_commands() {
        let mut list = DrawList::new();
        list.fill_rect(Vector2D::ZERO, 5.0, 5.0, Rgba::new(1, 2, 3, 4));
        list.stroke_line(Vector2D::ZERO, Vector2D::new(5.0, 0.0), &style());

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands(), list.commands());
    }
}
