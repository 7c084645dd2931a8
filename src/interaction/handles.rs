// src/interaction/handles.rs

use super::gesture::GesturePhase;
use crate::catalog::{Catalog, ShapeProfile};
use crate::config::PotteryConfiguration;
use crate::geometry::deform::{ProfileBand, band_of_index};
use crate::geometry::{DeformRegion, deform_profile};
use crate::studio::VesselRoot;
use bevy::math::Vec2;
use bevy::prelude::*;

/// Radialer Abstand der Band-Griffe von der Silhouette.
const RADIAL_MARGIN: f32 = 0.18;
/// Abstand des Höhen-Griffs über dem Gefäßrand.
const TOP_MARGIN: f32 = 0.25;
const HANDLE_RADIUS: f32 = 0.06;
/// Vergrößerung des Griffs unter dem Zeiger.
const HOVER_SCALE: f32 = 1.4;

/// Ein ziehbarer Griff am Gefäß.
#[derive(Component, Debug)]
pub struct MoldingHandle {
    pub region: DeformRegion,
}

/// Vier Griffe, als Kinder der Gefäßwurzel, damit sie eine eventuelle
/// Restdrehung des Tellers mitmachen.
pub fn spawn_handles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    roots: Query<Entity, With<VesselRoot>>,
) {
    let Ok(root) = roots.get_single() else {
        return;
    };
    let sphere = meshes.add(Sphere::new(HANDLE_RADIUS).mesh().build());
    let handle_material = |color: Color, materials: &mut Assets<StandardMaterial>| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.4,
            unlit: false,
            ..default()
        })
    };
    let regions = [
        (DeformRegion::Height, Color::rgb_u8(235, 201, 81)),
        (DeformRegion::Base, Color::rgb_u8(92, 153, 214)),
        (DeformRegion::Body, Color::rgb_u8(214, 92, 102)),
        (DeformRegion::Neck, Color::rgb_u8(108, 196, 130)),
    ];
    commands.entity(root).with_children(|parent| {
        for (region, color) in regions {
            parent.spawn((
                MoldingHandle { region },
                PbrBundle {
                    mesh: sphere.clone(),
                    material: handle_material(color, &mut materials),
                    ..default()
                },
            ));
        }
    });
}

pub fn despawn_handles(mut commands: Commands, handles: Query<Entity, With<MoldingHandle>>) {
    for entity in handles.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Ankerpunkt eines Griffs in der Profilebene (x = Radius, y = Höhe).
/// Band-Griffe sitzen auf Bandmitte, radial außerhalb des dicksten Punkts
/// ihres Bands; der Höhen-Griff schwebt über dem Rand auf der Achse.
pub fn handle_anchor(region: DeformRegion, points: &[Vec2]) -> Vec2 {
    debug_assert!(points.len() > 1);
    match region {
        DeformRegion::Height => {
            let top = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
            Vec2::new(0.0, top + TOP_MARGIN)
        }
        DeformRegion::Base | DeformRegion::Body | DeformRegion::Neck => {
            let band = match region {
                DeformRegion::Base => ProfileBand::Base,
                DeformRegion::Body => ProfileBand::Body,
                _ => ProfileBand::Neck,
            };
            let n = points.len();
            let mut max_radius = 0.0f32;
            let mut y_sum = 0.0;
            let mut count = 0usize;
            for (i, p) in points.iter().enumerate() {
                if band_of_index(i, n) == band {
                    max_radius = max_radius.max(p.x);
                    y_sum += p.y;
                    count += 1;
                }
            }
            debug_assert!(count > 0);
            Vec2::new(max_radius + RADIAL_MARGIN, y_sum / count as f32)
        }
    }
}

/// Positioniert die Griffe jeden Frame an der aktuell verformten
/// Silhouette, damit sie beim Ziehen an der Wand kleben. Läuft auf den
/// Kontrollpunkten, nicht der dichten Kurve — billig genug pro Frame.
pub fn layout_handles_system(
    config: Res<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    phase: Res<GesturePhase>,
    mut handles: Query<(&MoldingHandle, &mut Transform)>,
) {
    let Some(shape) = shapes.get(&config.shape_id) else {
        return;
    };
    let deformed = deform_profile(&shape.control_points, &config.deformation_factors);
    for (handle, mut transform) in handles.iter_mut() {
        let anchor = handle_anchor(handle.region, &deformed);
        // Griffe leben in der XY-Ebene der Wurzel; die Kamera schaut von
        // schräg vorn, das reicht zur Orientierung.
        transform.translation = Vec3::new(anchor.x, anchor.y, 0.0);
        let scale = if phase.engaged_region() == Some(handle.region) {
            HOVER_SCALE
        } else {
            1.0
        };
        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> Vec<Vec2> {
        (0..10).map(|i| Vec2::new(0.5, i as f32 * 0.2)).collect()
    }

    #[test]
    fn test_height_anchor_floats_above_rim() {
        let anchor = handle_anchor(DeformRegion::Height, &profile());
        assert_relative_eq!(anchor.x, 0.0);
        assert_relative_eq!(anchor.y, 1.8 + TOP_MARGIN);
    }

    #[test]
    fn test_band_anchors_sit_outside_their_band() {
        let points = profile();
        for region in [DeformRegion::Base, DeformRegion::Body, DeformRegion::Neck] {
            let anchor = handle_anchor(region, &points);
            assert_relative_eq!(anchor.x, 0.5 + RADIAL_MARGIN);
        }
        // Bandmitten sind nach Höhe geordnet
        let base = handle_anchor(DeformRegion::Base, &points);
        let body = handle_anchor(DeformRegion::Body, &points);
        let neck = handle_anchor(DeformRegion::Neck, &points);
        assert!(base.y < body.y && body.y < neck.y);
    }

    #[test]
    fn test_anchor_follows_deformation() {
        let points = profile();
        let factors = crate::geometry::DeformationFactors {
            body: 2.0,
            ..Default::default()
        };
        let deformed = deform_profile(&points, &factors);
        let anchor = handle_anchor(DeformRegion::Body, &deformed);
        assert_relative_eq!(anchor.x, 1.0 + RADIAL_MARGIN);
    }
}
