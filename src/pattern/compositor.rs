// src/pattern/compositor.rs

use super::raster::{fallback_image, rasterize_motif};
use crate::catalog::{Catalog, PatternTemplate};
use crate::config::{ConfigChangedEvent, PotteryConfiguration};
use crate::math::utils::hexcolor;
use crate::studio::VesselOverlay;
use bevy::math::Affine2;
use bevy::prelude::*;

/// Hält die Muster-Schale mit der Konfiguration synchron: rastert das
/// gewählte Motiv mit dem aktuellen Tint, setzt die Kachelwiederholung
/// über die UV-Transformation und blendet die Schale beim Sentinel
/// `none` aus.
pub fn refresh_pattern_overlay_system(
    mut changes: EventReader<ConfigChangedEvent>,
    config: Res<PotteryConfiguration>,
    patterns: Res<Catalog<PatternTemplate>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut overlay: Query<(&Handle<StandardMaterial>, &mut Visibility), With<VesselOverlay>>,
) {
    if !changes.read().any(|ConfigChangedEvent(scope)| scope.pattern) {
        return;
    }
    let Some(template) = patterns.get(&config.pattern_id) else {
        warn!(
            "configured pattern '{}' missing from catalog",
            config.pattern_id
        );
        return;
    };

    if template.is_none() {
        for (_, mut visibility) in overlay.iter_mut() {
            *visibility = Visibility::Hidden;
        }
        return;
    }

    let tint = hexcolor::parse_hex_rgb(&config.tint_color)
        .or_else(|| hexcolor::parse_hex_rgb(template.default_tint))
        .unwrap_or([0xff, 0xff, 0xff]);

    // Encoding-Fehler degradieren auf den transparenten Platzhalter —
    // das Rendering läuft weiter, nur das Motiv fehlt.
    let tile = match rasterize_motif(template, tint) {
        Ok(image) => image,
        Err(error) => {
            warn!("pattern raster failed, degrading to placeholder: {error}");
            fallback_image()
        }
    };

    for (material_handle, mut visibility) in overlay.iter_mut() {
        let Some(material) = materials.get_mut(material_handle) else {
            continue;
        };
        match material.base_color_texture.as_ref() {
            // Textur an Ort und Stelle ersetzen, der Handle bleibt stabil
            Some(texture) => {
                if let Some(image) = images.get_mut(texture) {
                    *image = tile.clone();
                }
            }
            None => material.base_color_texture = Some(images.add(tile.clone())),
        }
        material.uv_transform = Affine2::from_scale(template.repeat);
        *visibility = Visibility::Visible;
    }
}
