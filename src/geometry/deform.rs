// src/geometry/deform.rs

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Zulässiger Bereich aller Verformungsfaktoren.
pub const FACTOR_MIN: f32 = 0.4;
pub const FACTOR_MAX: f32 = 2.5;

/// Die drei Regionen einer Silhouette, plus die globale Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeformRegion {
    Height,
    Base,
    Body,
    Neck,
}

/// Die drei zusammenhängenden Index-Bänder eines Profils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileBand {
    Base,
    Body,
    Neck,
}

impl ProfileBand {
    pub fn region(self) -> DeformRegion {
        match self {
            ProfileBand::Base => DeformRegion::Base,
            ProfileBand::Body => DeformRegion::Body,
            ProfileBand::Neck => DeformRegion::Neck,
        }
    }
}

/// Bandzuordnung per Indexanteil: die ersten 30% der Punkte sind Fuß,
/// die nächsten 40% Bauch, die letzten 30% Hals. Feste Policy, nicht
/// konfigurierbar.
pub fn band_of_index(index: usize, point_count: usize) -> ProfileBand {
    debug_assert!(point_count > 1 && index < point_count);
    let fraction = index as f32 / (point_count - 1) as f32;
    if fraction < 0.3 {
        ProfileBand::Base
    } else if fraction < 0.7 {
        ProfileBand::Body
    } else {
        ProfileBand::Neck
    }
}

/// Die vier Verformungs-Skalare. 1.0 = unverformt.
///
/// Werte außerhalb von [0.4, 2.5] werden beim Lesen stillschweigend
/// geklemmt, nie zurückgewiesen — die Gestenschleife darf nicht haken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformationFactors {
    pub height: f32,
    pub base: f32,
    pub body: f32,
    pub neck: f32,
}

impl Default for DeformationFactors {
    fn default() -> Self {
        Self {
            height: 1.0,
            base: 1.0,
            body: 1.0,
            neck: 1.0,
        }
    }
}

impl DeformationFactors {
    /// Alle Faktoren auf den zulässigen Bereich geklemmt.
    pub fn clamped(&self) -> Self {
        Self {
            height: self.height.clamp(FACTOR_MIN, FACTOR_MAX),
            base: self.base.clamp(FACTOR_MIN, FACTOR_MAX),
            body: self.body.clamp(FACTOR_MIN, FACTOR_MAX),
            neck: self.neck.clamp(FACTOR_MIN, FACTOR_MAX),
        }
    }

    pub fn value(&self, region: DeformRegion) -> f32 {
        match region {
            DeformRegion::Height => self.height,
            DeformRegion::Base => self.base,
            DeformRegion::Body => self.body,
            DeformRegion::Neck => self.neck,
        }
    }

    /// Inkrementelle Anpassung aus der Gestensteuerung: `factor += delta`,
    /// sofort geklemmt, damit wiederholte kleine Bewegungen akkumulieren
    /// ohne den Bereich zu verlassen.
    pub fn adjust(&mut self, region: DeformRegion, delta: f32) {
        let slot = match region {
            DeformRegion::Height => &mut self.height,
            DeformRegion::Base => &mut self.base,
            DeformRegion::Body => &mut self.body,
            DeformRegion::Neck => &mut self.neck,
        };
        *slot = (*slot + delta).clamp(FACTOR_MIN, FACTOR_MAX);
    }
}

/// Wendet die Band-Faktoren auf ein Kontrollpunkt-Profil an.
///
/// Radius × Bandfaktor, Höhe × globaler Höhenfaktor. Punktzahl und
/// Reihenfolge bleiben erhalten; das Ergebnis ist bereit für die
/// Interpolation und Rotation.
pub fn deform_profile(points: &[Vec2], factors: &DeformationFactors) -> Vec<Vec2> {
    let factors = factors.clamped();
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let band_factor = factors.value(band_of_index(i, n).region());
            Vec2::new(p.x * band_factor, p.y * factors.height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_partition_30_40_30() {
        let n = 10;
        let bands: Vec<ProfileBand> = (0..n).map(|i| band_of_index(i, n)).collect();
        assert_eq!(&bands[0..3], &[ProfileBand::Base; 3]);
        assert_eq!(&bands[3..7], &[ProfileBand::Body; 4]);
        assert_eq!(&bands[7..10], &[ProfileBand::Neck; 3]);
    }

    #[test]
    fn test_out_of_range_factors_read_back_clamped() {
        let raw = DeformationFactors {
            height: 99.0,
            base: -3.0,
            body: 0.0,
            neck: 2.5001,
        };
        let clamped = raw.clamped();
        assert_relative_eq!(clamped.height, FACTOR_MAX);
        assert_relative_eq!(clamped.base, FACTOR_MIN);
        assert_relative_eq!(clamped.body, FACTOR_MIN);
        assert_relative_eq!(clamped.neck, FACTOR_MAX);
    }

    #[test]
    fn test_adjust_accumulates_and_clamps() {
        let mut factors = DeformationFactors::default();
        factors.adjust(DeformRegion::Height, 0.3);
        assert_relative_eq!(factors.height, 1.3);
        for _ in 0..20 {
            factors.adjust(DeformRegion::Height, 0.3);
        }
        assert_relative_eq!(factors.height, FACTOR_MAX);
        factors.adjust(DeformRegion::Base, -5.0);
        assert_relative_eq!(factors.base, FACTOR_MIN);
    }

    #[test]
    fn test_deform_preserves_count_and_order() {
        let points: Vec<Vec2> = (0..10).map(|i| Vec2::new(0.5, i as f32 * 0.2)).collect();
        let deformed = deform_profile(&points, &DeformationFactors::default());
        assert_eq!(deformed, points); // 1.0 überall = Identität
    }

    #[test]
    fn test_deform_scales_bands_independently() {
        let points: Vec<Vec2> = (0..10).map(|i| Vec2::new(1.0, i as f32)).collect();
        let factors = DeformationFactors {
            height: 2.0,
            base: 0.5,
            body: 1.0,
            neck: 1.5,
        };
        let deformed = deform_profile(&points, &factors);
        assert_relative_eq!(deformed[0].x, 0.5); // Fuß
        assert_relative_eq!(deformed[5].x, 1.0); // Bauch
        assert_relative_eq!(deformed[9].x, 1.5); // Hals
        for (i, p) in deformed.iter().enumerate() {
            assert_relative_eq!(p.y, i as f32 * 2.0);
        }
    }

    #[test]
    fn test_deform_silently_clamps_raw_input() {
        let points: Vec<Vec2> = (0..4).map(|i| Vec2::new(1.0, i as f32)).collect();
        let factors = DeformationFactors {
            height: 1.0,
            base: 100.0,
            body: 1.0,
            neck: 1.0,
        };
        let deformed = deform_profile(&points, &factors);
        assert_relative_eq!(deformed[0].x, FACTOR_MAX);
    }
}
