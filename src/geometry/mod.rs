// src/geometry/mod.rs

pub mod deform;
pub mod lathe;

pub use deform::{DeformRegion, DeformationFactors, deform_profile};
pub use lathe::LatheBuilder;

use crate::catalog::ShapeProfile;
use crate::error::StudioResult;
use crate::math::spline::ProfileInterpolator;
use bevy::math::Vec2;
use bevy::render::mesh::Mesh;

/// Die volle Profil-Pipeline: Kontrollpunkte verformen, dann zur dichten
/// Kurve interpolieren. Reihenfolge ist Vertrag — die Bänder beziehen sich
/// auf Kontrollpunkt-Indizes, nicht auf die dichte Kurve.
pub fn build_profile_curve(
    shape: &ShapeProfile,
    factors: &DeformationFactors,
) -> StudioResult<Vec<Vec2>> {
    let deformed = deform_profile(&shape.control_points, factors);
    ProfileInterpolator::default().interpolate(&deformed)
}

/// Kurve plus Rotation in einem Schritt, für die Rebuild-Systeme.
pub fn build_vessel_mesh(
    shape: &ShapeProfile,
    factors: &DeformationFactors,
) -> StudioResult<Mesh> {
    let curve = build_profile_curve(shape, factors)?;
    LatheBuilder::default().build(&curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ShapeProfile};

    #[test]
    fn test_pipeline_for_every_catalog_shape() {
        let catalog = Catalog::<ShapeProfile>::default();
        let factors = DeformationFactors::default();
        for shape in catalog.iter() {
            let curve = build_profile_curve(shape, &factors).unwrap();
            let mesh = LatheBuilder::default().build(&curve).unwrap();
            let count = mesh
                .attribute(Mesh::ATTRIBUTE_POSITION)
                .unwrap()
                .as_float3()
                .unwrap()
                .len();
            assert_eq!(count, 128 * curve.len(), "shape {}", shape.id);
        }
    }

    #[test]
    fn test_same_input_same_geometry() {
        let catalog = Catalog::<ShapeProfile>::default();
        let shape = catalog.get("thap").unwrap();
        let factors = DeformationFactors {
            height: 1.7,
            base: 0.8,
            body: 1.2,
            neck: 0.9,
        };
        let a = build_profile_curve(shape, &factors).unwrap();
        let b = build_profile_curve(shape, &factors).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_height_factor_scales_curve_height() {
        let catalog = Catalog::<ShapeProfile>::default();
        let shape = catalog.get("tyba").unwrap();
        let tall = DeformationFactors {
            height: 2.0,
            ..Default::default()
        };
        let base_curve = build_profile_curve(shape, &DeformationFactors::default()).unwrap();
        let tall_curve = build_profile_curve(shape, &tall).unwrap();
        let max_y = |c: &[Vec2]| c.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        approx::assert_relative_eq!(max_y(&tall_curve), max_y(&base_curve) * 2.0, epsilon = 1e-3);
    }
}
