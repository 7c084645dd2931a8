// src/config/resource.rs

use crate::catalog::{Catalog, GlazeMaterial, PatternTemplate, ShapeProfile, TINT_PALETTE};
use crate::geometry::{DeformRegion, DeformationFactors};
use crate::math::utils::hexcolor;
use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Partielle Konfiguration, wie sie von außen ankommt (UI-Panels, die
/// externe Beraterin). Feldnamen sind der öffentliche JSON-Vertrag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glaze_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
}

impl ConfigPatch {
    /// Parst einen Patch aus dem JSON-Vertrag der externen Schnittstelle.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// Welche Teile der Szene nach einer Konfigurationsänderung neu gebaut
/// werden müssen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeScope {
    pub geometry: bool,
    pub glaze: bool,
    pub pattern: bool,
}

impl ChangeScope {
    pub const ALL: Self = Self {
        geometry: true,
        glaze: true,
        pattern: true,
    };

    pub const GEOMETRY: Self = Self {
        geometry: true,
        glaze: false,
        pattern: false,
    };

    pub fn any(&self) -> bool {
        self.geometry || self.glaze || self.pattern
    }

    pub fn merge(&mut self, other: Self) {
        self.geometry |= other.geometry;
        self.glaze |= other.glaze;
        self.pattern |= other.pattern;
    }
}

/// Der eine veränderliche Zustand des Studios. Wird beim Start mit
/// Standardwerten angelegt, nie zerstört, nur überschrieben.
///
/// Alle Schreiber (UI, Gesten-Deltas, externe Kommandos) laufen durch
/// `apply` bzw. `adjust_factor`; es gibt genau eine logische Bearbeiterin,
/// daher keine optimistische Nebenläufigkeit.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotteryConfiguration {
    pub shape_id: String,
    pub glaze_id: String,
    pub pattern_id: String,
    /// 6-stelliger Hex-String; nur bedeutsam wenn `pattern_id != "none"`.
    pub tint_color: String,
    pub deformation_factors: DeformationFactors,
}

impl Default for PotteryConfiguration {
    fn default() -> Self {
        Self {
            shape_id: "tyba".to_string(),
            glaze_id: "ngoc".to_string(),
            pattern_id: "none".to_string(),
            tint_color: "#ffd700".to_string(),
            deformation_factors: DeformationFactors::default(),
        }
    }
}

impl PotteryConfiguration {
    /// Mischt einen partiellen Patch ein. Jedes Feld wird einzeln gegen
    /// seinen Katalog geprüft; unbekannte Ids und fehlgeformte Tints werden
    /// feldweise ignoriert (geloggt, nie an die Nutzerin durchgereicht —
    /// externe Eingaben sind unzuverlässig). Idempotent.
    pub fn apply(
        &mut self,
        patch: &ConfigPatch,
        shapes: &Catalog<ShapeProfile>,
        glazes: &Catalog<GlazeMaterial>,
        patterns: &Catalog<PatternTemplate>,
    ) -> ChangeScope {
        let mut scope = ChangeScope::default();

        if let Some(id) = patch.shape_id.as_deref() {
            if shapes.contains(id) {
                self.shape_id = id.to_string();
                // Formwechsel verwirft die Verformung: pro Form wird kein
                // Zustand aufgehoben.
                self.deformation_factors = DeformationFactors::default();
                scope.geometry = true;
            } else {
                warn!("ignoring unknown shape id '{id}'");
            }
        }

        if let Some(id) = patch.glaze_id.as_deref() {
            if glazes.contains(id) {
                self.glaze_id = id.to_string();
                scope.glaze = true;
            } else {
                warn!("ignoring unknown glaze id '{id}'");
            }
        }

        if let Some(id) = patch.pattern_id.as_deref() {
            if let Some(template) = patterns.get(id) {
                let freshly_selected = self.pattern_id != id;
                self.pattern_id = id.to_string();
                scope.pattern = true;
                // Frisch gewähltes Motiv ohne expliziten Tint übernimmt
                // seinen Standard-Tint.
                if freshly_selected && patch.tint_color.is_none() && !template.is_none() {
                    self.tint_color = template.default_tint.to_string();
                }
            } else {
                warn!("ignoring unknown pattern id '{id}'");
            }
        }

        if let Some(tint) = patch.tint_color.as_deref() {
            if let Some(rgb) = hexcolor::parse_hex_rgb(tint) {
                self.tint_color = hexcolor::format_hex_rgb(rgb);
                scope.pattern = true;
            } else {
                warn!("ignoring malformed tint '{tint}'");
            }
        }

        scope
    }

    /// Inkrementelles Delta aus einer Zieh-Geste. Klemmt sofort.
    pub fn adjust_factor(&mut self, region: DeformRegion, delta: f32) {
        self.deformation_factors.adjust(region, delta);
    }

    /// Gleichverteilte Zufallswahl aus jedem Katalog; Verformung wird
    /// zurückgesetzt, ein Tint nur bei echtem Motiv vergeben.
    pub fn randomize(
        &mut self,
        rng: &mut impl rand::Rng,
        shapes: &Catalog<ShapeProfile>,
        glazes: &Catalog<GlazeMaterial>,
        patterns: &Catalog<PatternTemplate>,
    ) -> ChangeScope {
        self.shape_id = shapes.pick_random(rng).id.to_string();
        self.glaze_id = glazes.pick_random(rng).id.to_string();
        let pattern = patterns.pick_random(rng);
        self.pattern_id = pattern.id.to_string();
        self.deformation_factors = DeformationFactors::default();
        if !pattern.is_none() {
            let tint = TINT_PALETTE[rng.random_range(0..TINT_PALETTE.len())];
            self.tint_color = tint.to_string();
        }
        ChangeScope::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn catalogs() -> (
        Catalog<ShapeProfile>,
        Catalog<GlazeMaterial>,
        Catalog<PatternTemplate>,
    ) {
        (
            Catalog::default(),
            Catalog::default(),
            Catalog::default(),
        )
    }

    fn patch(
        shape: Option<&str>,
        glaze: Option<&str>,
        pattern: Option<&str>,
        tint: Option<&str>,
    ) -> ConfigPatch {
        ConfigPatch {
            shape_id: shape.map(str::to_string),
            glaze_id: glaze.map(str::to_string),
            pattern_id: pattern.map(str::to_string),
            tint_color: tint.map(str::to_string),
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (shapes, glazes, patterns) = catalogs();
        let p = patch(Some("thap"), Some("chusa"), Some("dragon"), Some("#ffd700"));

        let mut once = PotteryConfiguration::default();
        once.apply(&p, &shapes, &glazes, &patterns);
        let mut twice = PotteryConfiguration::default();
        twice.apply(&p, &shapes, &glazes, &patterns);
        twice.apply(&p, &shapes, &glazes, &patterns);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_ids_are_ignored_field_by_field() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        let before = config.clone();

        let scope = config.apply(
            &patch(Some("nonexistent"), None, None, None),
            &shapes,
            &glazes,
            &patterns,
        );
        assert_eq!(config, before);
        assert!(!scope.any());

        // Gültige und ungültige Felder im selben Patch: nur die gültigen
        // greifen.
        config.apply(
            &patch(Some("bogus"), Some("chusa"), Some("bogus"), None),
            &shapes,
            &glazes,
            &patterns,
        );
        assert_eq!(config.shape_id, before.shape_id);
        assert_eq!(config.glaze_id, "chusa");
        assert_eq!(config.pattern_id, before.pattern_id);
    }

    #[test]
    fn test_shape_switch_resets_factors() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        config.adjust_factor(DeformRegion::Body, 0.8);
        config.adjust_factor(DeformRegion::Height, -0.4);

        for id in ["camlo", "thap", "batgom"] {
            config.apply(&patch(Some(id), None, None, None), &shapes, &glazes, &patterns);
            assert_eq!(config.deformation_factors, DeformationFactors::default());
            config.adjust_factor(DeformRegion::Neck, 0.5);
        }
    }

    #[test]
    fn test_fresh_pattern_adopts_default_tint() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        config.apply(&patch(None, None, Some("lotus"), None), &shapes, &glazes, &patterns);
        assert_eq!(
            config.tint_color,
            patterns.get("lotus").unwrap().default_tint
        );
    }

    #[test]
    fn test_explicit_tint_wins_over_default() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        config.apply(
            &patch(None, None, Some("lotus"), Some("#008080")),
            &shapes,
            &glazes,
            &patterns,
        );
        assert_eq!(config.tint_color, "#008080");
    }

    #[test]
    fn test_reapplying_same_pattern_keeps_user_tint() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        config.apply(&patch(None, None, Some("lotus"), None), &shapes, &glazes, &patterns);
        config.apply(&patch(None, None, None, Some("#0047ab")), &shapes, &glazes, &patterns);
        // "lotus" ist nicht mehr frisch: der Nutzer-Tint bleibt stehen
        config.apply(&patch(None, None, Some("lotus"), None), &shapes, &glazes, &patterns);
        assert_eq!(config.tint_color, "#0047ab");
    }

    #[test]
    fn test_malformed_tint_is_ignored() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();
        let before = config.tint_color.clone();
        config.apply(&patch(None, None, None, Some("gold")), &shapes, &glazes, &patterns);
        assert_eq!(config.tint_color, before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let (shapes, glazes, patterns) = catalogs();
        let mut config = PotteryConfiguration::default();

        config.apply(
            &patch(Some("thap"), Some("chusa"), Some("dragon"), Some("#ffd700")),
            &shapes,
            &glazes,
            &patterns,
        );
        assert_eq!(config.shape_id, "thap");
        assert_eq!(config.glaze_id, "chusa");
        assert_eq!(config.pattern_id, "dragon");
        assert_eq!(config.tint_color, "#ffd700");
        assert_eq!(config.deformation_factors, DeformationFactors::default());

        // Zieh-Geste am Höhen-Griff: +0.3
        config.adjust_factor(DeformRegion::Height, 0.3);
        assert_relative_eq!(config.deformation_factors.height, 1.3);

        // Weiter ziehen klemmt bei 2.5
        config.adjust_factor(DeformRegion::Height, 10.0);
        assert_relative_eq!(
            config.deformation_factors.height,
            crate::geometry::deform::FACTOR_MAX
        );
    }

    #[test]
    fn test_randomize_resets_factors_and_tints_only_real_patterns() {
        let (shapes, glazes, patterns) = catalogs();
        let mut rng = rand::rng();
        for _ in 0..64 {
            let mut config = PotteryConfiguration::default();
            config.adjust_factor(DeformRegion::Base, 1.0);
            config.tint_color = "#123456".to_string();
            config.randomize(&mut rng, &shapes, &glazes, &patterns);

            assert!(shapes.contains(&config.shape_id));
            assert!(glazes.contains(&config.glaze_id));
            assert!(patterns.contains(&config.pattern_id));
            assert_eq!(config.deformation_factors, DeformationFactors::default());
            if config.pattern_id == "none" {
                assert_eq!(config.tint_color, "#123456");
            } else {
                assert!(TINT_PALETTE.contains(&config.tint_color.as_str()));
            }
        }
    }

    #[test]
    fn test_patch_json_contract() {
        let p = ConfigPatch::from_json(
            r##"{"shapeId":"thap","glazeId":"chusa","patternId":"dragon","tintColor":"#ffd700"}"##,
        )
        .unwrap();
        assert_eq!(p.shape_id.as_deref(), Some("thap"));
        assert_eq!(p.tint_color.as_deref(), Some("#ffd700"));

        // Teilmengen sind erlaubt, unbekannte Felder nicht fatal
        let partial = ConfigPatch::from_json(r#"{"glazeId":"ngoc"}"#).unwrap();
        assert_eq!(partial.glaze_id.as_deref(), Some("ngoc"));
        assert_eq!(partial.shape_id, None);
    }

    #[test]
    fn test_snapshot_serializes_with_contract_names() {
        let config = PotteryConfiguration::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"shapeId\""));
        assert!(json.contains("\"tintColor\""));
        assert!(json.contains("\"deformationFactors\""));
    }
}
