// src/catalog/glazes.rs

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{StudioError, StudioResult};
use bevy::pbr::StandardMaterial;
use bevy::prelude::Color;

/// Eine Glasur: Grundfarbe plus Reflexionsparameter für PBR-Shading.
/// Alle Parameter liegen in [0, 1].
#[derive(Debug, Clone)]
pub struct GlazeMaterial {
    pub id: &'static str,
    pub name: &'static str,
    pub base_color: Color,
    pub roughness: f32,
    pub metalness: f32,
    /// Klarlack-Anteil der Glasurschicht. Bevy 0.13 kennt keinen eigenen
    /// Clearcoat-Kanal; der Wert wird auf die Reflektanz abgebildet.
    pub clearcoat: f32,
    pub emissive: Color,
}

impl CatalogEntry for GlazeMaterial {
    fn id(&self) -> &'static str {
        self.id
    }
}

impl GlazeMaterial {
    /// PBR-Material der Gefäßwand. Clearcoat wird auf die Reflektanz
    /// abgebildet: 0.5 ist Bevys neutraler Wert, Klarlack hebt ihn an.
    pub fn to_standard_material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: self.base_color,
            perceptual_roughness: self.roughness,
            metallic: self.metalness,
            reflectance: 0.5 + 0.5 * self.clearcoat,
            emissive: self.emissive.into(),
            ..StandardMaterial::default()
        }
    }
}

fn glaze(
    id: &'static str,
    name: &'static str,
    rgb: (u8, u8, u8),
    roughness: f32,
    metalness: f32,
    clearcoat: f32,
) -> GlazeMaterial {
    GlazeMaterial {
        id,
        name,
        base_color: Color::rgb_u8(rgb.0, rgb.1, rgb.2),
        roughness,
        metalness,
        clearcoat,
        emissive: Color::BLACK,
    }
}

impl Default for Catalog<GlazeMaterial> {
    fn default() -> Self {
        Catalog::from_entries(vec![
            // Men ngọc: Seladon, glasig mit hohem Klarlack-Anteil
            glaze("ngoc", "Men Ngọc", (127, 179, 161), 0.25, 0.0, 0.9),
            glaze("trangnga", "Trắng Ngà", (240, 230, 210), 0.35, 0.0, 0.7),
            glaze("vangtram", "Vàng Tràm", (201, 162, 39), 0.40, 0.1, 0.6),
            // Chu sa: tiefes Zinnoberrot
            glaze("chusa", "Chu Sa", (139, 46, 22), 0.30, 0.0, 0.8),
            // Men rạn: Krakelee-Glasur, matter
            glaze("ran", "Men Rạn Cổ", (184, 196, 176), 0.60, 0.0, 0.4),
            glaze("thanhlam", "Thanh Lam", (43, 110, 138), 0.28, 0.0, 0.85),
            glaze("tro", "Men Tro", (141, 138, 126), 0.55, 0.0, 0.3),
            glaze("hophach", "Hổ Phách", (199, 123, 48), 0.32, 0.05, 0.75),
            // Đất nung: unglasierter Scherben, stumpf
            glaze("datnung", "Đất Nung Mộc", (166, 99, 58), 0.85, 0.0, 0.0),
        ])
    }
}

impl Catalog<GlazeMaterial> {
    /// Parameterbereiche prüfen; fatal beim Start, da Datenfehler.
    pub fn validate(&self) -> StudioResult<()> {
        for glaze in self.iter() {
            for (label, value) in [
                ("roughness", glaze.roughness),
                ("metalness", glaze.metalness),
                ("clearcoat", glaze.clearcoat),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(StudioError::InvalidProfile {
                        id: glaze.id.to_string(),
                        reason: format!("{label} {value} outside [0, 1]"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        Catalog::<GlazeMaterial>::default().validate().unwrap();
    }

    #[test]
    fn test_clearcoat_maps_onto_reflectance() {
        let catalog = Catalog::<GlazeMaterial>::default();
        let ngoc = catalog.get("ngoc").unwrap().to_standard_material();
        approx::assert_relative_eq!(ngoc.reflectance, 0.95);
        // Unglasierter Scherben bleibt beim neutralen Wert
        let datnung = catalog.get("datnung").unwrap().to_standard_material();
        approx::assert_relative_eq!(datnung.reflectance, 0.5);
    }

    #[test]
    fn test_expected_roster() {
        let catalog = Catalog::<GlazeMaterial>::default();
        for id in [
            "ngoc", "trangnga", "vangtram", "chusa", "ran", "thanhlam", "tro", "hophach",
            "datnung",
        ] {
            assert!(catalog.contains(id), "missing glaze {id}");
        }
        assert_eq!(catalog.len(), 9);
    }
}
