// src/debug/profile_svg.rs

use crate::catalog::{Catalog, ShapeProfile};
use crate::config::PotteryConfiguration;
use crate::geometry::build_profile_curve;
use bevy::math::Vec2;
use bevy::prelude::*;

/// Wunsch, die aktuelle Silhouette als SVG auf Platte zu legen.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SvgExportRequest;

/// Rendert eine Profilkurve als Polyline, gespiegelte Kontur inklusive,
/// damit die Gefäßsilhouette im Viewer direkt erkennbar ist. Das SVG-y
/// wächst nach unten, die Kurve wird daher an der Gefäßhöhe gespiegelt.
pub fn profile_to_svg(curve: &[Vec2]) -> String {
    let max_y = curve.iter().map(|p| p.y).fold(0.0f32, f32::max);
    let max_x = curve.iter().map(|p| p.x).fold(0.0f32, f32::max);
    let width = (max_x * 2.2).max(0.1);
    let height = (max_y * 1.1).max(0.1);
    let offset_x = width / 2.0;

    let polyline = |mirror: f32| -> String {
        curve
            .iter()
            .map(|p| format!("{:.4},{:.4}", offset_x + mirror * p.x, max_y - p.y))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let stroke = width.max(height) * 0.004;

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="512" height="512" viewBox="0 0 {width:.4} {height:.4}" xmlns="http://www.w3.org/2000/svg">
  <rect x="0" y="0" width="{width:.4}" height="{height:.4}" fill="#f0f0f0" />
  <polyline points="{right}" fill="none" stroke="#5500aa" stroke-width="{stroke:.4}" />
  <polyline points="{left}" fill="none" stroke="#5500aa" stroke-width="{stroke:.4}" />
</svg>
"##,
        right = polyline(1.0),
        left = polyline(-1.0),
    )
}

pub fn export_profile_svg_system(
    mut requests: EventReader<SvgExportRequest>,
    config: Res<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
) {
    if requests.read().next().is_none() {
        return;
    }
    let Some(shape) = shapes.get(&config.shape_id) else {
        warn!("configured shape '{}' missing from catalog", config.shape_id);
        return;
    };
    let curve = match build_profile_curve(shape, &config.deformation_factors) {
        Ok(curve) => curve,
        Err(error) => {
            error!("profile export failed: {error}");
            return;
        }
    };
    let path = format!("profile_{}.svg", shape.id);
    match std::fs::write(&path, profile_to_svg(&curve)) {
        Ok(()) => info!("profile silhouette written to {path}"),
        Err(error) => error!("could not write {path}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_contains_mirrored_contours() {
        let curve = vec![Vec2::new(0.1, 0.0), Vec2::new(0.5, 0.5), Vec2::new(0.3, 1.0)];
        let svg = profile_to_svg(&curve);
        assert!(svg.starts_with("<?xml"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("viewBox=\"0 0 "));
    }
}
