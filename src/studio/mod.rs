// src/studio/mod.rs

pub mod components;
pub mod setup;
pub mod systems;

pub use components::{OVERLAY_SCALE, VesselBody, VesselOverlay, VesselRoot};

use bevy::prelude::*;

/// Die sichtbare Szene: Gefäß, Podest, Licht, Kamera, plus die Systeme,
/// die Geometrie und Glasur an die Konfiguration koppeln.
pub struct StudioPlugin;

impl Plugin for StudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup::setup_scene).add_systems(
            Update,
            (
                systems::rebuild_vessel_geometry_system,
                systems::refresh_glaze_system,
            ),
        );
    }
}
