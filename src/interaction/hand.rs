// src/interaction/hand.rs

use super::gesture::GesturePhase;
use super::handles::MoldingHandle;
use crate::math::utils::damping::damp_vec3;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Glättungsrate der Handbewegung. Höher = strafferes Nachziehen.
const EASE_LAMBDA: f32 = 12.0;
/// Blickpunkt, durch den die Zeigerebene gelegt wird.
const POINTER_PLANE_ORIGIN: Vec3 = Vec3::new(0.0, 0.8, 0.0);

/// Die stilisierte Töpferhand, die dem Zeiger im Formmodus nachschwebt.
#[derive(Component, Debug)]
pub struct HandIndicator;

pub fn spawn_hand_indicator(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        HandIndicator,
        PbrBundle {
            mesh: meshes.add(Sphere::new(0.09).mesh().build()),
            material: materials.add(StandardMaterial {
                base_color: Color::rgb_u8(224, 172, 134),
                perceptual_roughness: 0.8,
                ..default()
            }),
            visibility: Visibility::Hidden,
            ..default()
        },
    ));
}

pub fn show_hand_indicator(mut hands: Query<&mut Visibility, With<HandIndicator>>) {
    for mut visibility in hands.iter_mut() {
        *visibility = Visibility::Visible;
    }
}

pub fn hide_hand_indicator(mut hands: Query<&mut Visibility, With<HandIndicator>>) {
    for mut visibility in hands.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

/// Zieht die Hand geglättet zum Zielpunkt: zum berührten Griff, sonst
/// zur Zeigerposition auf der kamerazugewandten Ebene durch das Gefäß.
/// Ohne Zeiger bleibt die Hand einfach stehen.
pub fn hand_indicator_system(
    time: Res<Time>,
    phase: Res<GesturePhase>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    handles: Query<(&MoldingHandle, &GlobalTransform)>,
    mut hands: Query<&mut Transform, With<HandIndicator>>,
) {
    let Some(target) = pointer_target(&phase, &windows, &cameras, &handles) else {
        return;
    };
    for mut transform in hands.iter_mut() {
        transform.translation = damp_vec3(
            transform.translation,
            target,
            EASE_LAMBDA,
            time.delta_seconds(),
        );
    }
}

fn pointer_target(
    phase: &GesturePhase,
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform)>,
    handles: &Query<(&MoldingHandle, &GlobalTransform)>,
) -> Option<Vec3> {
    if let Some(region) = phase.engaged_region() {
        for (handle, transform) in handles.iter() {
            if handle.region == region {
                return Some(transform.translation());
            }
        }
    }
    let window = windows.get_single().ok()?;
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor)?;
    let normal: Vec3 = camera_transform.forward().into();
    let distance = ray.intersect_plane(POINTER_PLANE_ORIGIN, InfinitePlane3d::new(-normal))?;
    Some(ray.get_point(distance))
}
