// src/interaction/mod.rs

pub mod gesture;
pub mod hand;
pub mod handles;
pub mod molding;

pub use gesture::GesturePhase;
pub use handles::MoldingHandle;
pub use molding::{MoldingCommand, MoldingSnapshot, StudioMode};

use bevy::prelude::*;

/// Formmodus, Griffe, Zeiger-Gesten und die nachschwebende Hand.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<StudioMode>()
            .init_resource::<GesturePhase>()
            .init_resource::<MoldingSnapshot>()
            .add_event::<MoldingCommand>()
            .add_systems(Startup, hand::spawn_hand_indicator)
            .add_systems(
                OnEnter(StudioMode::Molding),
                (handles::spawn_handles, hand::show_hand_indicator),
            )
            .add_systems(
                OnExit(StudioMode::Molding),
                (
                    handles::despawn_handles,
                    hand::hide_hand_indicator,
                    gesture::reset_gesture_system,
                ),
            )
            .add_systems(
                Update,
                (
                    molding::molding_command_system,
                    molding::turntable_system.run_if(in_state(StudioMode::Viewing)),
                    (
                        gesture::pointer_gesture_system,
                        gesture::force_release_system,
                        handles::layout_handles_system,
                        hand::hand_indicator_system,
                    )
                        .run_if(in_state(StudioMode::Molding)),
                ),
            );
    }
}
