use wasm_bindgen::prelude::*;

mod preset;
use preset::swirl_config;

swirl_web::export_scene!(swirl_config(), "swirl-demo", vectors);
