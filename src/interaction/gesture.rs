// src/interaction/gesture.rs

use super::handles::MoldingHandle;
use crate::config::{ChangeScope, ConfigChangedEvent, PotteryConfiguration};
use crate::geometry::DeformRegion;
use bevy::math::Vec2;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowFocused};
use bevy_egui::EguiContexts;
use bevy_panorbit_camera::PanOrbitCamera;

/// Aufgreifradius um einen Griff, in Viewport-Pixeln.
const HOVER_RADIUS_PX: f32 = 18.0;
/// Faktor-Delta pro voller Viewport-Strecke.
const DRAG_SENSITIVITY: f32 = 2.5;

/// Zustand der Zeiger-Geste. Genau eine Geste zur Zeit; die Kamera wird
/// während des Ziehens stillgelegt, damit Orbit und Griff sich die Maus
/// nicht streitig machen.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Hovering {
        region: DeformRegion,
    },
    Dragging {
        region: DeformRegion,
        last_cursor: Vec2,
    },
}

impl GesturePhase {
    /// Der Griff, den die Geste gerade berührt oder zieht.
    pub fn engaged_region(&self) -> Option<DeformRegion> {
        match self {
            GesturePhase::Idle => None,
            GesturePhase::Hovering { region } | GesturePhase::Dragging { region, .. } => {
                Some(*region)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging { .. })
    }
}

/// Übersetzt eine Zeigerbewegung in ein Faktor-Delta. Der Höhen-Griff
/// reagiert auf vertikales Ziehen (Bildschirm-y wächst nach unten, daher
/// negiert), die Band-Griffe auf horizontales.
fn drag_delta(region: DeformRegion, cursor_delta: Vec2, viewport: Vec2) -> f32 {
    match region {
        DeformRegion::Height => -cursor_delta.y / viewport.y * DRAG_SENSITIVITY,
        DeformRegion::Base | DeformRegion::Body | DeformRegion::Neck => {
            cursor_delta.x / viewport.x * DRAG_SENSITIVITY
        }
    }
}

/// Egui besitzt den Zeiger (Panel unter dem Cursor, offenes Widget):
/// keine neue Geste beginnen. Eine schon laufende Zieh-Geste läuft
/// weiter, ihr Ende gehört weiterhin uns.
fn egui_blocks_gesture(egui_wants_pointer: bool, phase: &GesturePhase) -> bool {
    egui_wants_pointer && !phase.is_dragging()
}

pub fn pointer_gesture_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    handles: Query<(&MoldingHandle, &GlobalTransform)>,
    mut egui: EguiContexts,
    mut phase: ResMut<GesturePhase>,
    mut config: ResMut<PotteryConfiguration>,
    mut changed: EventWriter<ConfigChangedEvent>,
    mut orbit: Query<&mut PanOrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if egui_blocks_gesture(egui.ctx_mut().wants_pointer_input(), &phase) {
        *phase = GesturePhase::Idle;
        return;
    }

    if let GesturePhase::Dragging {
        region,
        last_cursor,
    } = *phase
    {
        let released = !buttons.pressed(MouseButton::Left);
        let Some(cursor) = cursor else {
            // Zeiger hat das Fenster verlassen: Geste zwangsweise beenden,
            // sonst klebt der Griff am nächsten Wiedereintritt
            info!("drag released: cursor left window");
            end_drag(&mut phase, &mut orbit);
            return;
        };
        if released {
            end_drag(&mut phase, &mut orbit);
            *phase = GesturePhase::Hovering { region };
            return;
        }
        let viewport = Vec2::new(window.width(), window.height());
        let delta = drag_delta(region, cursor - last_cursor, viewport);
        if delta != 0.0 {
            config.adjust_factor(region, delta);
            changed.send(ConfigChangedEvent(ChangeScope::GEOMETRY));
        }
        *phase = GesturePhase::Dragging {
            region,
            last_cursor: cursor,
        };
        return;
    }

    // Nicht am Ziehen: Hover bestimmen und ggf. Geste beginnen
    let hovered = cursor.and_then(|cursor| {
        handles
            .iter()
            .filter_map(|(handle, transform)| {
                let screen = camera.world_to_viewport(camera_transform, transform.translation())?;
                let distance = screen.distance(cursor);
                (distance <= HOVER_RADIUS_PX).then_some((handle.region, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(region, _)| region)
    });

    match hovered {
        Some(region) if buttons.just_pressed(MouseButton::Left) => {
            if let Some(cursor) = cursor {
                for mut camera in orbit.iter_mut() {
                    camera.enabled = false;
                }
                *phase = GesturePhase::Dragging {
                    region,
                    last_cursor: cursor,
                };
            }
        }
        Some(region) => *phase = GesturePhase::Hovering { region },
        None => *phase = GesturePhase::Idle,
    }
}

/// Fokusverlust beendet eine laufende Geste sofort; ein `mouseup`
/// außerhalb des Fensters käme sonst nie an.
pub fn force_release_system(
    mut focus_events: EventReader<WindowFocused>,
    mut phase: ResMut<GesturePhase>,
    mut orbit: Query<&mut PanOrbitCamera>,
) {
    let lost_focus = focus_events.read().any(|event| !event.focused);
    if lost_focus && phase.is_dragging() {
        info!("drag released: window lost focus");
        end_drag(&mut phase, &mut orbit);
    }
}

/// Beim Verlassen des Formmodus darf kein Gestenrest zurückbleiben.
pub fn reset_gesture_system(
    mut phase: ResMut<GesturePhase>,
    mut orbit: Query<&mut PanOrbitCamera>,
) {
    end_drag(&mut phase, &mut orbit);
}

fn end_drag(phase: &mut GesturePhase, orbit: &mut Query<&mut PanOrbitCamera>) {
    *phase = GesturePhase::Idle;
    for mut camera in orbit.iter_mut() {
        camera.enabled = true;
    }
}
