// src/config/events.rs

use super::resource::{ChangeScope, ConfigPatch, PotteryConfiguration};
use bevy::prelude::*;

/// Ein partieller Konfigurationswunsch — aus dem UI, der Gestensteuerung
/// oder dem externen JSON-Vertrag. Wird zentral von einem System gemischt.
#[derive(Event, Debug, Clone)]
pub struct ApplyConfigEvent(pub ConfigPatch);

/// Die Konfiguration hat sich geändert; der Scope sagt den nachgelagerten
/// Systemen, welche Szenenteile neu gebaut werden müssen.
#[derive(Event, Debug, Clone, Copy)]
pub struct ConfigChangedEvent(pub ChangeScope);

/// Wunsch nach einer zufälligen Gesamtkonfiguration.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RandomizeRequestEvent;

/// Übergibt einen Konfigurations-Schnappschuss an die Beratungsschnittstelle.
/// Der Schnappschuss wird beim Auslösen kopiert, damit spätere Änderungen
/// die laufende Anfrage nicht verfälschen.
#[derive(Event, Debug, Clone)]
pub struct ConsultationRequestEvent(pub PotteryConfiguration);
