// src/pattern/mod.rs

pub mod compositor;
pub mod raster;

pub use compositor::refresh_pattern_overlay_system;
pub use raster::{RASTER_SIZE, fallback_image, rasterize_motif};

use bevy::prelude::*;

pub struct PatternPlugin;

impl Plugin for PatternPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, refresh_pattern_overlay_system);
    }
}
