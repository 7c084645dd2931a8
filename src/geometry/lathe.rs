// src/geometry/lathe.rs

use crate::error::{StudioError, StudioResult};
use crate::math::utils::constants;
use bevy::math::{Vec2, Vec3};
use bevy::render::{
    mesh::{Indices, Mesh, PrimitiveTopology},
    render_asset::RenderAssetUsages,
};

/// Rotiert eine dichte 2D-Profilkurve um die vertikale Achse zu einer
/// triangulierten Mantelfläche.
///
/// Der Builder validiert keine Mannigfaltigkeit: Profile, deren Höhe die
/// Richtung wechselt (vorgetäuschte Hohlräume bei Schalen und Flaschen),
/// werden unverändert rotiert — sich selbst schneidende Ergebnisse sind
/// eine dokumentierte Näherung.
#[derive(Debug, Clone)]
pub struct LatheBuilder {
    /// Winkelauflösung der Rotation.
    pub segments: usize,
}

impl Default for LatheBuilder {
    fn default() -> Self {
        Self { segments: 128 }
    }
}

impl LatheBuilder {
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(3),
        }
    }

    /// Erzeugt das Rotationsmesh. Genau `segments × profile.len()` Vertices;
    /// die Spalten schließen sich modulo `segments`. Deterministisch:
    /// identische Eingabe ergibt bitidentische Puffer.
    pub fn build(&self, profile: &[Vec2]) -> StudioResult<Mesh> {
        let rows = profile.len();
        if rows < 2 {
            return Err(StudioError::InsufficientPoints {
                expected: 2,
                actual: rows,
            });
        }
        let segments = self.segments;

        // Winkel-Tabelle einmal berechnen, damit jede Zeile exakt dieselben
        // Kosinus/Sinus-Werte verwendet.
        let ring: Vec<(f32, f32)> = (0..segments)
            .map(|i| {
                let theta = constants::TAU * i as f32 / segments as f32;
                (theta.cos(), theta.sin())
            })
            .collect();

        let normals_2d = profile_normals(profile);

        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(segments * rows);
        let mut normals: Vec<[f32; 3]> = Vec::with_capacity(segments * rows);
        let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(segments * rows);

        for (j, point) in profile.iter().enumerate() {
            let n2 = normals_2d[j];
            let v = 1.0 - j as f32 / (rows - 1) as f32;
            for (i, &(cos, sin)) in ring.iter().enumerate() {
                positions.push([point.x * cos, point.y, point.x * sin]);
                let normal = Vec3::new(n2.x * cos, n2.y, n2.x * sin).normalize_or_zero();
                normals.push(normal.to_array());
                uvs.push([i as f32 / segments as f32, v]);
            }
        }

        let mut indices: Vec<u32> = Vec::with_capacity(segments * (rows - 1) * 6);
        for j in 0..rows - 1 {
            let row = (j * segments) as u32;
            let next_row = row + segments as u32;
            for i in 0..segments as u32 {
                let i_next = (i + 1) % segments as u32;
                // Zwei Dreiecke pro Quad, von außen gegen den Uhrzeigersinn
                indices.extend_from_slice(&[row + i, next_row + i, row + i_next]);
                indices.extend_from_slice(&[row + i_next, next_row + i, next_row + i_next]);
            }
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        Ok(mesh)
    }
}

/// 2D-Außennormalen entlang des Profils aus zentralen Differenzen.
/// Die Tangente zeigt in Richtung wachsender Zeilen; die Normale ist die
/// um -90° gedrehte Tangente (für aufsteigende Profile zeigt sie von der
/// Achse weg).
fn profile_normals(profile: &[Vec2]) -> Vec<Vec2> {
    let n = profile.len();
    (0..n)
        .map(|j| {
            let tangent = if j == 0 {
                profile[1] - profile[0]
            } else if j == n - 1 {
                profile[n - 1] - profile[n - 2]
            } else {
                profile[j + 1] - profile[j - 1]
            };
            let normal = Vec2::new(tangent.y, -tangent.x);
            if normal.length_squared() < constants::EPSILON_SQUARED {
                Vec2::X // degeneriertes Segment: radial nach außen
            } else {
                normal.normalize()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::spline::ProfileInterpolator;
    use approx::assert_relative_eq;

    fn mesh_positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
            .unwrap()
            .as_float3()
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_vertex_count_is_segments_times_points() {
        let control = vec![
            Vec2::new(0.02, 0.0),
            Vec2::new(0.5, 0.1),
            Vec2::new(0.6, 0.8),
            Vec2::new(0.3, 1.5),
        ];
        let curve = ProfileInterpolator::default().interpolate(&control).unwrap();
        let mesh = LatheBuilder::default().build(&curve).unwrap();
        assert_eq!(mesh_positions(&mesh).len(), 128 * curve.len());
    }

    #[test]
    fn test_deterministic_byte_identical() {
        let curve = ProfileInterpolator::default()
            .interpolate(&[
                Vec2::new(0.02, 0.0),
                Vec2::new(0.5, 0.1),
                Vec2::new(0.6, 0.8),
                Vec2::new(0.3, 1.5),
            ])
            .unwrap();
        let a = LatheBuilder::default().build(&curve).unwrap();
        let b = LatheBuilder::default().build(&curve).unwrap();
        let pa = mesh_positions(&a);
        let pb = mesh_positions(&b);
        assert_eq!(pa.len(), pb.len());
        for (va, vb) in pa.iter().zip(pb.iter()) {
            for k in 0..3 {
                assert_eq!(va[k].to_bits(), vb[k].to_bits());
            }
        }
    }

    #[test]
    fn test_accepts_height_reversing_profile() {
        // Schalenwand, die außen hoch und innen wieder hinunter läuft —
        // wird ohne Validierung rotiert.
        let reversing = vec![
            Vec2::new(0.05, 0.0),
            Vec2::new(0.8, 0.1),
            Vec2::new(0.9, 0.8),
            Vec2::new(0.8, 0.75),
            Vec2::new(0.2, 0.3),
        ];
        let mesh = LatheBuilder::default().build(&reversing).unwrap();
        assert_eq!(mesh_positions(&mesh).len(), 128 * reversing.len());
    }

    #[test]
    fn test_rejects_degenerate_profile() {
        assert!(LatheBuilder::default().build(&[Vec2::ZERO]).is_err());
        assert!(LatheBuilder::default().build(&[]).is_err());
    }

    #[test]
    fn test_normals_are_unit_and_outward_for_cylinder() {
        // Zylinderprofil: alle Normalen rein radial
        let cylinder: Vec<Vec2> = (0..8).map(|j| Vec2::new(0.5, j as f32 * 0.2)).collect();
        let mesh = LatheBuilder::new(64).build(&cylinder).unwrap();
        let positions = mesh_positions(&mesh);
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .unwrap()
            .as_float3()
            .unwrap()
            .to_vec();
        for (p, n) in positions.iter().zip(normals.iter()) {
            let normal = Vec3::from_array(*n);
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-4);
            assert_relative_eq!(normal.y, 0.0, epsilon = 1e-4);
            // Radial nach außen: Normale parallel zur XZ-Position
            let radial = Vec3::new(p[0], 0.0, p[2]).normalize();
            assert_relative_eq!(normal.dot(radial), 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_indices_reference_valid_vertices_and_wrap() {
        let curve = vec![Vec2::new(0.1, 0.0), Vec2::new(0.4, 0.5), Vec2::new(0.2, 1.0)];
        let segments = 16;
        let mesh = LatheBuilder::new(segments).build(&curve).unwrap();
        let vertex_count = (segments * curve.len()) as u32;
        match mesh.indices().unwrap() {
            Indices::U32(indices) => {
                assert_eq!(indices.len(), segments * (curve.len() - 1) * 6);
                assert!(indices.iter().all(|&i| i < vertex_count));
            }
            _ => panic!("expected u32 indices"),
        }
    }
}
