// src/catalog/mod.rs
//
// Statische Kataloge des Studios: Silhouetten, Glasuren und Dekormotive.
// Jeder Katalog wird einmal beim Start aufgebaut (feste Zuordnung id ->
// unveränderlicher Eintrag) und danach nur noch gelesen.

pub mod glazes;
pub mod patterns;
pub mod shapes;

pub use glazes::GlazeMaterial;
pub use patterns::{MotifElement, PatternTemplate, TINT_PALETTE};
pub use shapes::ShapeProfile;

use crate::error::{StudioError, StudioResult};
use bevy::prelude::*;
use std::collections::HashMap;

/// Ein Katalogeintrag ist über einen stabilen, öffentlichen Kleinbuchstaben-
/// Token identifizierbar (z.B. `tyba`, `ngoc`, `dragon`).
pub trait CatalogEntry {
    fn id(&self) -> &'static str;
}

/// Unveränderliches Register von Katalogeinträgen mit stabiler Reihenfolge
/// (für UI-Listen) und O(1)-Lookup per id.
#[derive(Resource, Debug)]
pub struct Catalog<T: CatalogEntry + Send + Sync + 'static> {
    entries: HashMap<&'static str, T>,
    order: Vec<&'static str>,
}

impl<T: CatalogEntry + Send + Sync + 'static> Catalog<T> {
    pub fn from_entries(entries: Vec<T>) -> Self {
        let order: Vec<&'static str> = entries.iter().map(|e| e.id()).collect();
        let entries = entries.into_iter().map(|e| (e.id(), e)).collect();
        Self { entries, order }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Wie `get`, aber mit sprechendem Fehler für Pfade, die eine gültige
    /// id voraussetzen.
    pub fn require(&self, kind: &'static str, id: &str) -> StudioResult<&T> {
        self.entries.get(id).ok_or_else(|| StudioError::UnknownCatalogId {
            kind,
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in Registrierungsreihenfolge.
    pub fn ids(&self) -> &[&'static str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Gleichverteilte Zufallswahl eines Eintrags.
    pub fn pick_random(&self, rng: &mut impl rand::Rng) -> &T {
        let index = rng.random_range(0..self.order.len());
        &self.entries[self.order[index]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(&'static str);
    impl CatalogEntry for Dummy {
        fn id(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = Catalog::from_entries(vec![Dummy("b"), Dummy("a")]);
        assert_eq!(catalog.ids(), &["b", "a"]);
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("c"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_require_names_kind_and_id() {
        let catalog = Catalog::from_entries(vec![Dummy("a")]);
        assert!(catalog.require("dummy", "a").is_ok());
        let error = catalog.require("dummy", "missing").unwrap_err();
        assert_eq!(error.to_string(), "unknown dummy id 'missing'");
    }

    #[test]
    fn test_pick_random_is_member() {
        let catalog = Catalog::from_entries(vec![Dummy("x"), Dummy("y"), Dummy("z")]);
        let mut rng = rand::rng();
        for _ in 0..32 {
            let picked = catalog.pick_random(&mut rng);
            assert!(catalog.contains(picked.id()));
        }
    }
}
