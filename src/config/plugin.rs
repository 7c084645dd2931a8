// src/config/plugin.rs

use super::events::{
    ApplyConfigEvent, ConfigChangedEvent, ConsultationRequestEvent, RandomizeRequestEvent,
};
use super::resource::{ChangeScope, PotteryConfiguration};
use crate::catalog::{Catalog, GlazeMaterial, PatternTemplate, ShapeProfile};
use bevy::prelude::*;

/// Besitzt die Konfiguration und alle Kataloge und verdrahtet den
/// Ereignisfluss: Patch rein, `ConfigChangedEvent` raus.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Catalog<ShapeProfile>>()
            .init_resource::<Catalog<GlazeMaterial>>()
            .init_resource::<Catalog<PatternTemplate>>()
            .init_resource::<PotteryConfiguration>()
            .add_event::<ApplyConfigEvent>()
            .add_event::<ConfigChangedEvent>()
            .add_event::<RandomizeRequestEvent>()
            .add_event::<ConsultationRequestEvent>()
            .add_systems(Startup, validate_catalogs_system)
            .add_systems(
                Update,
                (
                    apply_config_system,
                    randomize_config_system,
                    consultation_log_system,
                ),
            );
    }
}

/// Katalogdaten sind eingebaute Konstanten; ein kaputter Eintrag ist ein
/// Programmierfehler und beendet den Start, statt später in der
/// Geometrie-Pipeline zu scheitern.
fn validate_catalogs_system(
    shapes: Res<Catalog<ShapeProfile>>,
    glazes: Res<Catalog<GlazeMaterial>>,
    patterns: Res<Catalog<PatternTemplate>>,
) {
    if let Err(error) = shapes.validate() {
        panic!("shape catalog invalid: {error}");
    }
    if let Err(error) = glazes.validate() {
        panic!("glaze catalog invalid: {error}");
    }
    if let Err(error) = patterns.validate() {
        panic!("pattern catalog invalid: {error}");
    }
    info!(
        "catalogs ready: {} shapes, {} glazes, {} patterns",
        shapes.len(),
        glazes.len(),
        patterns.len()
    );
}

/// Mischt alle in diesem Frame eingegangenen Patches in die Konfiguration
/// und meldet den vereinigten Scope genau einmal weiter.
fn apply_config_system(
    mut patches: EventReader<ApplyConfigEvent>,
    mut config: ResMut<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    glazes: Res<Catalog<GlazeMaterial>>,
    patterns: Res<Catalog<PatternTemplate>>,
    mut changed: EventWriter<ConfigChangedEvent>,
) {
    let mut scope = ChangeScope::default();
    for ApplyConfigEvent(patch) in patches.read() {
        scope.merge(config.apply(patch, &shapes, &glazes, &patterns));
    }
    if scope.any() {
        changed.send(ConfigChangedEvent(scope));
    }
}

fn randomize_config_system(
    mut requests: EventReader<RandomizeRequestEvent>,
    mut config: ResMut<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    glazes: Res<Catalog<GlazeMaterial>>,
    patterns: Res<Catalog<PatternTemplate>>,
    mut changed: EventWriter<ConfigChangedEvent>,
) {
    if requests.read().next().is_none() {
        return;
    }
    let mut rng = rand::rng();
    let scope = config.randomize(&mut rng, &shapes, &glazes, &patterns);
    info!(
        "randomized configuration: shape={} glaze={} pattern={}",
        config.shape_id, config.glaze_id, config.pattern_id
    );
    changed.send(ConfigChangedEvent(scope));
}

/// Protokolliert den Beratungs-Schnappschuss im JSON-Vertrag. Hier endet
/// die Zuständigkeit des Studios; Transport und Antwort liegen außerhalb.
fn consultation_log_system(mut requests: EventReader<ConsultationRequestEvent>) {
    for ConsultationRequestEvent(snapshot) in requests.read() {
        match serde_json::to_string(snapshot) {
            Ok(payload) => info!("consultation request: {payload}"),
            Err(error) => warn!("consultation snapshot not serializable: {error}"),
        }
    }
}
