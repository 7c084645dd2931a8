// src/debug/mod.rs

pub mod profile_svg;

pub use profile_svg::SvgExportRequest;

use bevy::prelude::*;

/// Entwicklungswerkzeuge: SVG-Abzug der aktuellen Silhouette.
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SvgExportRequest>()
            .add_systems(Update, profile_svg::export_profile_svg_system);
    }
}
