// src/studio/setup.rs

use super::components::{OVERLAY_SCALE, VesselBody, VesselOverlay, VesselRoot};
use crate::catalog::{Catalog, GlazeMaterial, ShapeProfile};
use crate::config::PotteryConfiguration;
use crate::geometry::build_vessel_mesh;
use crate::pattern::raster::fallback_image;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Blickpunkt der Kamera, ungefähr Gefäßmitte.
const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 0.8, 0.0);

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    config: Res<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    glazes: Res<Catalog<GlazeMaterial>>,
) {
    // Kataloge sind beim Start validiert; scheitert der erste Aufbau
    // trotzdem, ist das ein Programmierfehler.
    let shape = match shapes.require("shape", &config.shape_id) {
        Ok(shape) => shape,
        Err(error) => panic!("scene setup failed: {error}"),
    };
    let glaze = match glazes.require("glaze", &config.glaze_id) {
        Ok(glaze) => glaze,
        Err(error) => panic!("scene setup failed: {error}"),
    };
    let mesh = match build_vessel_mesh(shape, &config.deformation_factors) {
        Ok(mesh) => mesh,
        Err(error) => panic!("initial vessel mesh failed: {error}"),
    };
    let vessel_mesh = meshes.add(mesh);

    // Muster-Schale startet unsichtbar mit dem transparenten Platzhalter;
    // der Compositor tauscht die Textur bei der ersten Musterwahl.
    let overlay_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(images.add(fallback_image())),
        perceptual_roughness: glaze.roughness,
        alpha_mode: AlphaMode::Mask(0.5),
        ..default()
    });

    commands
        .spawn((VesselRoot, SpatialBundle::default()))
        .with_children(|parent| {
            parent.spawn((
                VesselBody,
                PbrBundle {
                    mesh: vessel_mesh.clone(),
                    material: materials.add(glaze.to_standard_material()),
                    ..default()
                },
            ));
            parent.spawn((
                VesselOverlay,
                PbrBundle {
                    mesh: vessel_mesh,
                    material: overlay_material,
                    transform: Transform::from_scale(Vec3::splat(OVERLAY_SCALE)),
                    visibility: Visibility::Hidden,
                    ..default()
                },
            ));
        });

    // Podest unter dem Gefäß
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cylinder::new(1.4, 0.15).mesh().build()),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(0.35, 0.27, 0.22),
            perceptual_roughness: 0.9,
            ..default()
        }),
        transform: Transform::from_xyz(0.0, -0.075, 0.0),
        ..default()
    });

    // Licht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            shadows_enabled: true,
            intensity: 10_000_000.,
            range: 100.0,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0),
        ..default()
    });

    // Kamera: Orbit auf der rechten Maustaste, die linke gehört den Griffen
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(-2.0, 2.5, 5.0).looking_at(CAMERA_FOCUS, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            focus: CAMERA_FOCUS,
            radius: Some(5.0),
            ..default()
        },
    ));
}
