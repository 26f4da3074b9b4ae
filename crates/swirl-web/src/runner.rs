use swirl_engine::{
    ConfigError, DrawList, InputEvent, InputQueue, ProtocolLayout, Rng, Scene, SceneConfig,
    SurfaceRect, Vector2D, to_surface_coords,
};
#[cfg(feature = "vectors")]
use swirl_engine::TessellatedSurface;

/// Scene runner that wires the swirl core to a browser frame loop.
///
/// Each page creates a `thread_local!` SceneRunner and exports free functions
/// via `#[wasm_bindgen]` (see [`export_scene!`](crate::export_scene)), because
/// wasm-bindgen cannot export stateful Rust values directly.
pub struct SceneRunner {
    scene: Scene,
    input: InputQueue,
    draw_list: DrawList,
    layout: ProtocolLayout,
    #[cfg(feature = "vectors")]
    vectors: TessellatedSurface,
}

impl SceneRunner {
    /// Build a scene for a `width` × `height` surface. Spawn values come from
    /// an RNG seeded with `seed`.
    pub fn new(config: SceneConfig, width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        let layout = ProtocolLayout::from_config(&config);
        let mut rng = Rng::new(seed);
        let scene = Scene::new(config, width, height, &mut rng)?;

        Ok(Self {
            scene,
            input: InputQueue::new(),
            draw_list: DrawList::with_layout(&layout),
            layout,
            #[cfg(feature = "vectors")]
            vectors: TessellatedSurface::new(),
        })
    }

    /// Parse `json` as the scene config, falling back to `fallback` if it is rejected.
    pub fn from_json_or(
        json: &str,
        fallback: SceneConfig,
        width: f64,
        height: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let config = SceneConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("scene config rejected, using defaults: {err}");
            fallback
        });
        Self::new(config, width, height, seed)
    }

    /// Pointer moved; coordinates in client space, `rect` is the canvas box.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: SurfaceRect) {
        let p = to_surface_coords(Vector2D::new(client_x, client_y), &rect, self.scene.size());
        self.input.push(InputEvent::PointerMove { x: p.x, y: p.y });
    }

    pub fn pointer_leave(&mut self) {
        self.input.push(InputEvent::PointerLeave);
    }

    /// Run one frame: apply queued input, paint, and pack the host buffers.
    pub fn tick(&mut self) {
        self.scene.apply_input(&mut self.input);

        self.draw_list.clear();
        self.scene.frame(&mut self.draw_list);
        self.draw_list
            .pack(self.scene.frame_count(), self.scene.size(), &self.layout);

        #[cfg(feature = "vectors")]
        {
            self.vectors.clear();
            self.draw_list.replay(&mut self.vectors);
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    // ---- Pointer accessors for host buffer reads ----

    pub fn draw_buffer_ptr(&self) -> *const f32 {
        self.draw_list.buffer_ptr()
    }

    pub fn draw_buffer_len(&self) -> u32 {
        self.draw_list.buffer().len() as u32
    }

    pub fn command_count(&self) -> u32 {
        self.draw_list.len() as u32
    }

    pub fn max_records(&self) -> u32 {
        self.layout.max_records as u32
    }

    pub fn surface_width(&self) -> f64 {
        self.scene.size().width()
    }

    pub fn surface_height(&self) -> f64 {
        self.scene.size().height()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }
}
