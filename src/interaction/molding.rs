// src/interaction/molding.rs

use crate::config::{ChangeScope, ConfigChangedEvent, PotteryConfiguration};
use crate::geometry::DeformationFactors;
use crate::studio::VesselRoot;
use bevy::prelude::*;

/// Drehgeschwindigkeit des Tellers im Betrachtungsmodus, rad/s.
const TURNTABLE_RATE: f32 = 0.25;

/// Die zwei Betriebsarten des Studios. Im Betrachtungsmodus dreht der
/// Teller und die Maus gehört der Kamera; im Formmodus steht das Gefäß
/// still und die linke Taste zieht an den Griffen.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StudioMode {
    #[default]
    Viewing,
    Molding,
}

/// Moduswechsel-Kommandos aus dem UI.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoldingCommand {
    Enter,
    Cancel,
    Confirm,
}

/// Verformungsstand beim Betreten des Formmodus. `Cancel` stellt ihn
/// wieder her, `Confirm` verwirft ihn.
#[derive(Resource, Debug, Default)]
pub struct MoldingSnapshot(pub Option<DeformationFactors>);

pub fn molding_command_system(
    mut commands: EventReader<MoldingCommand>,
    mut next_mode: ResMut<NextState<StudioMode>>,
    mut snapshot: ResMut<MoldingSnapshot>,
    mut config: ResMut<PotteryConfiguration>,
    mut changed: EventWriter<ConfigChangedEvent>,
) {
    for command in commands.read() {
        match command {
            MoldingCommand::Enter => {
                snapshot.0 = Some(config.deformation_factors);
                next_mode.set(StudioMode::Molding);
            }
            MoldingCommand::Cancel => {
                if let Some(factors) = snapshot.0.take() {
                    config.deformation_factors = factors;
                    changed.send(ConfigChangedEvent(ChangeScope::GEOMETRY));
                }
                next_mode.set(StudioMode::Viewing);
            }
            MoldingCommand::Confirm => {
                snapshot.0 = None;
                next_mode.set(StudioMode::Viewing);
            }
        }
    }
}

/// Der Drehteller: rotiert die Gefäßwurzel, nicht die Kamera. Läuft nur
/// im Betrachtungsmodus — beim Formen steht das Gefäß still.
pub fn turntable_system(time: Res<Time>, mut roots: Query<&mut Transform, With<VesselRoot>>) {
    for mut transform in roots.iter_mut() {
        transform.rotate_y(TURNTABLE_RATE * time.delta_seconds());
    }
}
