// src/catalog/shapes.rs

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{StudioError, StudioResult};
use crate::geometry::deform::band_of_index;
use crate::math::utils::constants;
use bevy::math::Vec2;

/// Eine Silhouette als geordnete Folge von (Radius, Höhe)-Kontrollpunkten.
///
/// Der erste Punkt liegt an (oder nahe) der Rotationsachse. Innerhalb jedes
/// der drei Bänder (Fuß, Bauch, Hals) steigen die Höhen monoton, damit die
/// Rotationsfläche eine gültige Mantelfläche bleibt.
#[derive(Debug, Clone)]
pub struct ShapeProfile {
    pub id: &'static str,
    /// Anzeigename (vietnamesisch, wie im Werkstatt-Katalog).
    pub name: &'static str,
    pub control_points: Vec<Vec2>,
}

impl CatalogEntry for ShapeProfile {
    fn id(&self) -> &'static str {
        self.id
    }
}

fn profile(id: &'static str, name: &'static str, points: &[(f32, f32)]) -> ShapeProfile {
    ShapeProfile {
        id,
        name,
        control_points: points.iter().map(|&(r, h)| Vec2::new(r, h)).collect(),
    }
}

impl Default for Catalog<ShapeProfile> {
    fn default() -> Self {
        Catalog::from_entries(vec![
            // Tỳ bà: birnenförmige Vase mit schlankem Hals und leicht
            // ausgestellter Lippe.
            profile(
                "tyba",
                "Tỳ Bà",
                &[
                    (0.02, 0.0),
                    (0.42, 0.02),
                    (0.56, 0.25),
                    (0.62, 0.55),
                    (0.50, 0.95),
                    (0.30, 1.30),
                    (0.22, 1.55),
                    (0.24, 1.75),
                    (0.30, 1.85),
                ],
            ),
            // Cam lộ: Kugelbauch, langer dünner Hals, kleine Knospe oben.
            profile(
                "camlo",
                "Cam Lộ",
                &[
                    (0.02, 0.0),
                    (0.40, 0.05),
                    (0.52, 0.30),
                    (0.42, 0.60),
                    (0.16, 0.82),
                    (0.13, 1.25),
                    (0.20, 1.48),
                    (0.14, 1.65),
                    (0.16, 1.80),
                ],
            ),
            // Thạp: hoher Vorratstopf mit breiter Schulter.
            profile(
                "thap",
                "Thạp",
                &[
                    (0.02, 0.0),
                    (0.36, 0.02),
                    (0.50, 0.30),
                    (0.58, 0.80),
                    (0.60, 1.20),
                    (0.52, 1.55),
                    (0.42, 1.75),
                    (0.44, 1.85),
                ],
            ),
            // Nậm rượu: bauchige Weinflasche mit engem Hals.
            profile(
                "namruou",
                "Nậm Rượu",
                &[
                    (0.02, 0.0),
                    (0.38, 0.04),
                    (0.55, 0.35),
                    (0.52, 0.70),
                    (0.30, 0.95),
                    (0.12, 1.10),
                    (0.10, 1.45),
                    (0.14, 1.60),
                ],
            ),
            // Giọt nước: Tropfenform, breiter Fuß, spitz zulaufend.
            profile(
                "giotnuoc",
                "Giọt Nước",
                &[
                    (0.02, 0.0),
                    (0.45, 0.05),
                    (0.58, 0.40),
                    (0.50, 0.90),
                    (0.32, 1.30),
                    (0.16, 1.60),
                    (0.05, 1.80),
                ],
            ),
            // Bát sen: flache, weit geöffnete Lotus-Schale.
            profile(
                "batgom",
                "Bát Sen",
                &[
                    (0.02, 0.0),
                    (0.30, 0.02),
                    (0.50, 0.15),
                    (0.68, 0.45),
                    (0.80, 0.70),
                    (0.85, 0.85),
                ],
            ),
        ])
    }
}

impl Catalog<ShapeProfile> {
    /// Prüft alle registrierten Silhouetten. Ein Verstoß ist ein Datenfehler
    /// im Katalog und beim Start fatal.
    pub fn validate(&self) -> StudioResult<()> {
        for shape in self.iter() {
            validate_profile(shape)?;
        }
        Ok(())
    }
}

fn validate_profile(shape: &ShapeProfile) -> StudioResult<()> {
    let points = &shape.control_points;
    let invalid = |reason: String| StudioError::InvalidProfile {
        id: shape.id.to_string(),
        reason,
    };

    if points.len() < 4 {
        return Err(invalid(format!(
            "needs at least 4 control points, got {}",
            points.len()
        )));
    }
    for (i, p) in points.iter().enumerate() {
        if p.x < 0.0 {
            return Err(invalid(format!("negative radius {} at point {}", p.x, i)));
        }
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(invalid(format!("non-finite coordinate at point {i}")));
        }
    }
    // Höhen innerhalb jedes Bands monoton nicht-fallend
    for i in 0..points.len() - 1 {
        let band = band_of_index(i, points.len());
        if band == band_of_index(i + 1, points.len())
            && points[i + 1].y + constants::EPSILON < points[i].y
        {
            return Err(invalid(format!(
                "height decreases within {band:?} band between points {} and {}",
                i,
                i + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::<ShapeProfile>::default();
        catalog.validate().unwrap();
    }

    #[test]
    fn test_expected_roster() {
        let catalog = Catalog::<ShapeProfile>::default();
        for id in ["tyba", "camlo", "thap", "namruou", "giotnuoc", "batgom"] {
            assert!(catalog.contains(id), "missing shape {id}");
        }
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_rejects_too_few_points() {
        let shape = profile("stub", "Stub", &[(0.0, 0.0), (0.5, 0.5), (0.2, 1.0)]);
        assert!(matches!(
            validate_profile(&shape),
            Err(StudioError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let shape = profile(
            "stub",
            "Stub",
            &[(0.0, 0.0), (-0.1, 0.2), (0.5, 0.5), (0.2, 1.0)],
        );
        assert!(validate_profile(&shape).is_err());
    }

    #[test]
    fn test_rejects_height_reversal_inside_band() {
        // Zwei benachbarte Punkte im selben Band mit fallender Höhe
        let shape = profile(
            "stub",
            "Stub",
            &[
                (0.0, 0.0),
                (0.4, 0.5),
                (0.5, 0.4),
                (0.5, 0.8),
                (0.3, 1.0),
                (0.2, 1.2),
                (0.2, 1.4),
                (0.2, 1.6),
                (0.2, 1.8),
                (0.2, 2.0),
            ],
        );
        assert!(validate_profile(&shape).is_err());
    }
}
