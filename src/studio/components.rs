// src/studio/components.rs

use bevy::prelude::*;

/// Wurzel der Gefäß-Hierarchie. Der Drehteller rotiert diese Entity,
/// nicht die Kamera — Griffe und Overlay drehen als Kinder mit.
#[derive(Component, Debug)]
pub struct VesselRoot;

/// Die glasierte Gefäßwand.
#[derive(Component, Debug)]
pub struct VesselBody;

/// Die Muster-Schale: teilt den Mesh-Handle der Wand und sitzt minimal
/// aufskaliert darüber, damit das Motiv nicht in der Glasur z-kämpft.
#[derive(Component, Debug)]
pub struct VesselOverlay;

/// Skalierung der Muster-Schale relativ zur Wand.
pub const OVERLAY_SCALE: f32 = 1.003;
