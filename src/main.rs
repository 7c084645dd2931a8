// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

pub mod catalog;
pub mod config;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod pattern;
pub mod studio;
pub mod ui;

use config::ConfigPlugin;
use debug::DebugPlugin;
use interaction::InteractionPlugin;
use pattern::PatternPlugin;
use studio::StudioPlugin;
use ui::studio_control_ui_system;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gốm Việt — Töpferwerkstatt".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(ConfigPlugin)
        .add_plugins(StudioPlugin)
        .add_plugins(PatternPlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(DebugPlugin)
        .add_systems(Update, studio_control_ui_system)
        .run();
}
