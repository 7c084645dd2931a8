// src/studio/systems.rs

use super::components::{VesselBody, VesselOverlay};
use crate::catalog::{Catalog, GlazeMaterial, ShapeProfile};
use crate::config::{ConfigChangedEvent, PotteryConfiguration};
use crate::geometry::build_vessel_mesh;
use bevy::prelude::*;

/// Baut das Rotationsmesh neu, sobald eine Änderung die Geometrie berührt.
/// Der Mesh-Handle bleibt stehen; Wand und Muster-Schale teilen ihn und
/// ziehen dadurch gemeinsam nach.
pub fn rebuild_vessel_geometry_system(
    mut changes: EventReader<ConfigChangedEvent>,
    config: Res<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    body: Query<&Handle<Mesh>, With<VesselBody>>,
) {
    if !changes.read().any(|ConfigChangedEvent(scope)| scope.geometry) {
        return;
    }
    let Some(shape) = shapes.get(&config.shape_id) else {
        warn!("configured shape '{}' missing from catalog", config.shape_id);
        return;
    };
    match build_vessel_mesh(shape, &config.deformation_factors) {
        Ok(new_mesh) => {
            for handle in body.iter() {
                if let Some(mesh) = meshes.get_mut(handle) {
                    *mesh = new_mesh.clone();
                }
            }
        }
        // Altes Mesh stehen lassen; die Szene darf nie leer werden
        Err(error) => error!("vessel rebuild failed: {error}"),
    }
}

/// Tauscht das PBR-Material der Gefäßwand bei Glasurwechsel. Die
/// Muster-Schale behält Textur und Alpha-Maske, übernimmt aber die
/// Rauheit der neuen Glasur, damit das Motiv im selben Licht sitzt.
pub fn refresh_glaze_system(
    mut changes: EventReader<ConfigChangedEvent>,
    config: Res<PotteryConfiguration>,
    glazes: Res<Catalog<GlazeMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    body: Query<&Handle<StandardMaterial>, With<VesselBody>>,
    overlay: Query<&Handle<StandardMaterial>, With<VesselOverlay>>,
) {
    if !changes.read().any(|ConfigChangedEvent(scope)| scope.glaze) {
        return;
    }
    let Some(glaze) = glazes.get(&config.glaze_id) else {
        warn!("configured glaze '{}' missing from catalog", config.glaze_id);
        return;
    };
    for handle in body.iter() {
        if let Some(material) = materials.get_mut(handle) {
            *material = glaze.to_standard_material();
        }
    }
    for handle in overlay.iter() {
        if let Some(material) = materials.get_mut(handle) {
            material.perceptual_roughness = glaze.roughness;
        }
    }
}
