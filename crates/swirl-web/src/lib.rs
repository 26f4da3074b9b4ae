pub mod runner;

pub use runner::SceneRunner;
pub use swirl_engine;

/// Generate all `#[wasm_bindgen]` exports for a swirl scene page.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, pointer handlers, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// swirl_web::export_scene!(swirl_web::swirl_engine::SceneConfig::default(), "my-swirl");
/// ```
///
/// # Arguments
///
/// - `$config`: expression producing the `SceneConfig` used by `scene_init`, and
///   as the fallback when `scene_init_with_config` receives JSON it rejects
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($config:expr, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        fn install(
            result: Result<$crate::SceneRunner, $crate::swirl_engine::ConfigError>,
            width: f64,
            height: f64,
            seed: u32,
        ) {
            let runner = result.unwrap_or_else(|err| {
                log::error!("{}: {}; falling back to default config", $scene_name, err);
                $crate::SceneRunner::new(
                    $crate::swirl_engine::SceneConfig::default(),
                    width,
                    height,
                    seed as u64,
                )
                .expect("default scene config is valid")
            });

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $scene_name);
        }

        fn init_logging() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }

        #[wasm_bindgen]
        pub fn scene_init(width: f64, height: f64, seed: u32) {
            init_logging();
            let result = $crate::SceneRunner::new($config, width, height, seed as u64);
            install(result, width, height, seed);
        }

        #[wasm_bindgen]
        pub fn scene_init_with_config(json: &str, width: f64, height: f64, seed: u32) {
            init_logging();
            let result = $crate::SceneRunner::from_json_or(json, $config, width, height, seed as u64);
            install(result, width, height, seed);
        }

        #[wasm_bindgen]
        pub fn scene_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn scene_pointer_move(
            client_x: f64,
            client_y: f64,
            left: f64,
            top: f64,
            right: f64,
            bottom: f64,
        ) {
            let rect = $crate::swirl_engine::SurfaceRect { left, top, right, bottom };
            with_runner(|r| r.pointer_move(client_x, client_y, rect));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_leave() {
            with_runner(|r| r.pointer_leave());
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_draw_buffer_ptr() -> *const f32 {
            with_runner(|r| r.draw_buffer_ptr())
        }

        #[wasm_bindgen]
        pub fn get_draw_buffer_len() -> u32 {
            with_runner(|r| r.draw_buffer_len())
        }

        #[wasm_bindgen]
        pub fn get_command_count() -> u32 {
            with_runner(|r| r.command_count())
        }

        #[wasm_bindgen]
        pub fn get_max_records() -> u32 {
            with_runner(|r| r.max_records())
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> f64 {
            with_runner(|r| r.surface_width())
        }

        #[wasm_bindgen]
        pub fn get_surface_height() -> f64 {
            with_runner(|r| r.surface_height())
        }
    };

    // Variant with vectors feature
    ($config:expr, $scene_name:literal, vectors) => {
        $crate::export_scene!($config, $scene_name);

        // ---- Tessellated vertex accessors (only when vectors feature is enabled) ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }
    };
}
