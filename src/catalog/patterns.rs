// src/catalog/patterns.rs

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{StudioError, StudioResult};
use crate::math::utils::hexcolor;
use bevy::math::Vec2;

/// Kuratierte Tint-Farben für die Zufallswahl, aus dem Beratungsvertrag
/// des Ateliers (Vàng Kim, Đỏ, Xanh Coban, Trắng, Hồng Phấn, Xanh Ngọc).
pub const TINT_PALETTE: &[&str] = &[
    "#ffd700", "#ff0000", "#0047ab", "#ffffff", "#ffc0cb", "#008080",
];

/// Ein Element eines Vektormotivs, in Einheitszellen-Koordinaten [0,1]².
/// Das gesamte Motiv wird in genau einer austauschbaren Farbe (dem Tint)
/// gezeichnet; die Geometrie trägt keine eigene Farbe.
#[derive(Debug, Clone)]
pub enum MotifElement {
    /// Gefülltes, einfaches (nicht selbstschneidendes) Polygon.
    Polygon(Vec<Vec2>),
    /// Gefüllte Kreisscheibe.
    Disc { center: Vec2, radius: f32 },
}

/// Ein Dekormotiv: Vektorgeometrie, Kachelwiederholung und Standard-Tint.
///
/// Richtungsbetonte Motive (Drache, Phönix) bekommen eine niedrigere
/// horizontale Wiederholung als symmetrisch kachelbare (Wellen, Blüten).
#[derive(Debug, Clone)]
pub struct PatternTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub elements: Vec<MotifElement>,
    /// Kachel-Wiederholung (horizontal, vertikal) auf dem Gefäßmantel.
    pub repeat: Vec2,
    pub default_tint: &'static str,
}

impl PatternTemplate {
    /// `none` ist der gültige Sentinel für "kein Dekor".
    pub fn is_none(&self) -> bool {
        self.id == "none"
    }
}

impl CatalogEntry for PatternTemplate {
    fn id(&self) -> &'static str {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Motiv-Geometrie-Helfer
// ---------------------------------------------------------------------------

/// Rautenförmiges Blütenblatt: Spitze bei `tip`, Basis bei `base`.
fn petal(base: Vec2, tip: Vec2, width: f32) -> MotifElement {
    let along = tip - base;
    let side = Vec2::new(-along.y, along.x).normalize_or_zero() * (width * 0.5);
    let mid = base + along * 0.45;
    MotifElement::Polygon(vec![base, mid + side, tip, mid - side])
}

/// Achsparalleles Rechteck.
fn quad(x0: f32, y0: f32, x1: f32, y1: f32) -> MotifElement {
    MotifElement::Polygon(vec![
        Vec2::new(x0, y0),
        Vec2::new(x1, y0),
        Vec2::new(x1, y1),
        Vec2::new(x0, y1),
    ])
}

/// Halbkreisbogen als geschlossenes Band (Außenbogen hin, Innenbogen zurück).
fn arc_band(center: Vec2, radius: f32, thickness: f32, samples: usize) -> MotifElement {
    use crate::math::utils::constants::PI;
    let mut points = Vec::with_capacity(samples * 2 + 2);
    let inner = (radius - thickness).max(0.01);
    for i in 0..=samples {
        let a = PI * i as f32 / samples as f32;
        points.push(center + Vec2::new(a.cos(), a.sin()) * radius);
    }
    for i in (0..=samples).rev() {
        let a = PI * i as f32 / samples as f32;
        points.push(center + Vec2::new(a.cos(), a.sin()) * inner);
    }
    MotifElement::Polygon(points)
}

/// Geschwungenes S-Band aus zwei versetzten Punktzügen (Drachenleib).
fn serpent_band(amplitude: f32, thickness: f32, y_mid: f32, samples: usize) -> MotifElement {
    use crate::math::utils::constants::TAU;
    let mut points = Vec::with_capacity(samples * 2 + 2);
    for i in 0..=samples {
        let x = 0.08 + 0.84 * i as f32 / samples as f32;
        let y = y_mid + amplitude * (TAU * (x - 0.08) / 0.84).sin();
        points.push(Vec2::new(x, y + thickness * 0.5));
    }
    for i in (0..=samples).rev() {
        let x = 0.08 + 0.84 * i as f32 / samples as f32;
        let y = y_mid + amplitude * (TAU * (x - 0.08) / 0.84).sin();
        points.push(Vec2::new(x, y - thickness * 0.5));
    }
    MotifElement::Polygon(points)
}

fn dragon_motif() -> Vec<MotifElement> {
    vec![
        serpent_band(0.16, 0.09, 0.5, 24),
        // Kopf und Auge
        MotifElement::Disc {
            center: Vec2::new(0.88, 0.52),
            radius: 0.07,
        },
        MotifElement::Disc {
            center: Vec2::new(0.905, 0.545),
            radius: 0.018,
        },
        // Rückenkamm
        petal(Vec2::new(0.30, 0.62), Vec2::new(0.26, 0.80), 0.05),
        petal(Vec2::new(0.50, 0.40), Vec2::new(0.54, 0.22), 0.05),
        petal(Vec2::new(0.68, 0.62), Vec2::new(0.72, 0.80), 0.05),
    ]
}

fn lotus_motif() -> Vec<MotifElement> {
    let base = Vec2::new(0.5, 0.22);
    vec![
        petal(base, Vec2::new(0.50, 0.85), 0.16),
        petal(base, Vec2::new(0.26, 0.72), 0.13),
        petal(base, Vec2::new(0.74, 0.72), 0.13),
        petal(base, Vec2::new(0.12, 0.48), 0.10),
        petal(base, Vec2::new(0.88, 0.48), 0.10),
        MotifElement::Disc {
            center: Vec2::new(0.5, 0.20),
            radius: 0.07,
        },
    ]
}

fn phoenix_motif() -> Vec<MotifElement> {
    vec![
        // Körper und Kopf
        MotifElement::Disc {
            center: Vec2::new(0.38, 0.58),
            radius: 0.09,
        },
        MotifElement::Disc {
            center: Vec2::new(0.47, 0.70),
            radius: 0.045,
        },
        // Drei geschwungene Schwanzfedern
        petal(Vec2::new(0.36, 0.52), Vec2::new(0.10, 0.18), 0.08),
        petal(Vec2::new(0.40, 0.50), Vec2::new(0.28, 0.10), 0.08),
        petal(Vec2::new(0.44, 0.52), Vec2::new(0.52, 0.12), 0.08),
        // Ausgebreiteter Flügel
        petal(Vec2::new(0.42, 0.64), Vec2::new(0.78, 0.84), 0.11),
        petal(Vec2::new(0.40, 0.62), Vec2::new(0.86, 0.62), 0.08),
    ]
}

fn waves_motif() -> Vec<MotifElement> {
    vec![
        arc_band(Vec2::new(0.25, 0.18), 0.20, 0.055, 12),
        arc_band(Vec2::new(0.75, 0.18), 0.20, 0.055, 12),
        arc_band(Vec2::new(0.50, 0.52), 0.20, 0.055, 12),
        arc_band(Vec2::new(0.00, 0.52), 0.20, 0.055, 12),
        arc_band(Vec2::new(1.00, 0.52), 0.20, 0.055, 12),
        arc_band(Vec2::new(0.25, 0.86), 0.20, 0.055, 12),
        arc_band(Vec2::new(0.75, 0.86), 0.20, 0.055, 12),
    ]
}

fn bamboo_motif() -> Vec<MotifElement> {
    vec![
        // Halm mit Nodien-Lücken
        quad(0.44, 0.04, 0.56, 0.30),
        quad(0.44, 0.34, 0.56, 0.62),
        quad(0.44, 0.66, 0.56, 0.96),
        // Blätter an den Nodien
        petal(Vec2::new(0.56, 0.62), Vec2::new(0.86, 0.74), 0.10),
        petal(Vec2::new(0.44, 0.34), Vec2::new(0.14, 0.46), 0.10),
        petal(Vec2::new(0.56, 0.32), Vec2::new(0.82, 0.20), 0.09),
    ]
}

fn chrysanthemum_motif() -> Vec<MotifElement> {
    use crate::math::utils::constants::TAU;
    let center = Vec2::new(0.5, 0.5);
    let mut elements: Vec<MotifElement> = (0..12)
        .map(|i| {
            let a = TAU * i as f32 / 12.0;
            let dir = Vec2::new(a.cos(), a.sin());
            petal(center + dir * 0.10, center + dir * 0.38, 0.09)
        })
        .collect();
    elements.push(MotifElement::Disc {
        center,
        radius: 0.09,
    });
    elements
}

impl Default for Catalog<PatternTemplate> {
    fn default() -> Self {
        Catalog::from_entries(vec![
            PatternTemplate {
                id: "none",
                name: "Trơn",
                elements: Vec::new(),
                repeat: Vec2::ONE,
                default_tint: "#ffffff",
            },
            PatternTemplate {
                id: "dragon",
                name: "Đắp Rồng",
                elements: dragon_motif(),
                repeat: Vec2::new(2.0, 2.0),
                default_tint: "#ffd700",
            },
            PatternTemplate {
                id: "lotus",
                name: "Hoa Sen",
                elements: lotus_motif(),
                repeat: Vec2::new(5.0, 3.0),
                default_tint: "#ffc0cb",
            },
            PatternTemplate {
                id: "phoenix",
                name: "Chim Phượng",
                elements: phoenix_motif(),
                repeat: Vec2::new(2.0, 2.0),
                default_tint: "#ffaa00",
            },
            PatternTemplate {
                id: "waves",
                name: "Sóng Nước",
                elements: waves_motif(),
                repeat: Vec2::new(8.0, 4.0),
                default_tint: "#0047ab",
            },
            PatternTemplate {
                id: "bamboo",
                name: "Trúc Quân Tử",
                elements: bamboo_motif(),
                repeat: Vec2::new(6.0, 2.0),
                default_tint: "#3a7d44",
            },
            PatternTemplate {
                id: "chrysanthemum",
                name: "Cúc Đại Đóa",
                elements: chrysanthemum_motif(),
                repeat: Vec2::new(5.0, 3.0),
                default_tint: "#ffffff",
            },
        ])
    }
}

impl Catalog<PatternTemplate> {
    pub fn validate(&self) -> StudioResult<()> {
        for template in self.iter() {
            if !hexcolor::is_valid_hex_rgb(template.default_tint) {
                return Err(StudioError::InvalidProfile {
                    id: template.id.to_string(),
                    reason: format!("default tint '{}' is not a hex color", template.default_tint),
                });
            }
            if template.repeat.x < 1.0 || template.repeat.y < 1.0 {
                return Err(StudioError::InvalidProfile {
                    id: template.id.to_string(),
                    reason: format!("tile repeat {:?} below 1", template.repeat),
                });
            }
            if !template.is_none() && template.elements.is_empty() {
                return Err(StudioError::InvalidProfile {
                    id: template.id.to_string(),
                    reason: "motif has no elements".to_string(),
                });
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
        Catalog::<PatternTemplate>::default().validate().unwrap();
    }

    #[test]
    fn test_expected_roster_with_none_sentinel() {
        let catalog = Catalog::<PatternTemplate>::default();
        for id in [
            "none",
            "dragon",
            "lotus",
            "phoenix",
            "waves",
            "bamboo",
            "chrysanthemum",
        ] {
            assert!(catalog.contains(id), "missing pattern {id}");
        }
        assert!(catalog.get("none").unwrap().is_none());
        assert!(!catalog.get("dragon").unwrap().is_none());
    }

    #[test]
    fn test_directional_motifs_repeat_less_horizontally() {
        let catalog = Catalog::<PatternTemplate>::default();
        let dragon = catalog.get("dragon").unwrap();
        let waves = catalog.get("waves").unwrap();
        assert!(dragon.repeat.x < waves.repeat.x);
    }

    #[test]
    fn test_motif_geometry_stays_in_unit_cell() {
        let catalog = Catalog::<PatternTemplate>::default();
        for template in catalog.iter() {
            for element in &template.elements {
                match element {
                    MotifElement::Polygon(points) => {
                        for p in points {
                            assert!(
                                (-0.25..=1.25).contains(&p.x) && (-0.25..=1.25).contains(&p.y),
                                "{}: point {p:?} far outside unit cell",
                                template.id
                            );
                        }
                    }
                    MotifElement::Disc { center, radius } => {
                        assert!(*radius > 0.0);
                        assert!((0.0..=1.0).contains(&center.x));
                        assert!((0.0..=1.0).contains(&center.y));
                    }
                }
            }
        }
    }
}
