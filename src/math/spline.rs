// src/math/spline.rs

use crate::error::{StudioError, StudioResult};
use crate::math::utils::{comparison, constants};
use bevy::math::Vec2;

/// Interpoliert ein spärliches Silhouetten-Profil zu einer dichten, glatten
/// Kurve (zentripetaler Catmull-Rom-Spline). Die Kurve läuft exakt durch
/// jeden Kontrollpunkt; die Originalpunkte tauchen im Ergebnis an ihren
/// parametrischen Stellen unverändert wieder auf.
#[derive(Debug, Clone)]
pub struct ProfileInterpolator {
    /// Ziel-Punktdichte der Ausgabekurve. Die tatsächliche Anzahl ist
    /// `per_edge * (n - 1) + 1`, damit jeder Kontrollpunkt exakt auf einem
    /// Sample liegt.
    pub target_points: usize,
    /// Tension-Parameter (Alpha der Knoten-Parametrisierung).
    /// 0.0 = Uniform, 0.5 = Centripetal, 1.0 = Chordal.
    pub tension: f32,
}

impl Default for ProfileInterpolator {
    fn default() -> Self {
        Self {
            target_points: 128,
            tension: 0.5, // Centripetal verhindert Schleifen und Überschwinger
        }
    }
}

impl ProfileInterpolator {
    pub fn new(target_points: usize) -> Self {
        Self {
            target_points: target_points.max(2),
            ..Default::default()
        }
    }

    pub fn with_tension(mut self, tension_alpha: f32) -> Self {
        self.tension = tension_alpha.clamp(0.0, 1.0);
        self
    }

    /// Anzahl der Samples pro Kante, so dass die Gesamtzahl nahe an
    /// `target_points` liegt und Kontrollpunkte auf Segmentgrenzen fallen.
    fn samples_per_edge(&self, control_count: usize) -> usize {
        ((self.target_points.saturating_sub(1)) / (control_count - 1)).max(1)
    }

    /// Interpoliert eine offene Profilkurve durch alle Kontrollpunkte.
    ///
    /// Weniger als 2 Punkte sind kein Kurvenzug und führen zu einem Fehler;
    /// bei exakt 2 Punkten degeneriert der Spline zur Strecke.
    pub fn interpolate(&self, points: &[Vec2]) -> StudioResult<Vec<Vec2>> {
        let n = points.len();
        if n < 2 {
            return Err(StudioError::InsufficientPoints {
                expected: 2,
                actual: n,
            });
        }

        let per_edge = self.samples_per_edge(n);
        let mut curve = Vec::with_capacity(per_edge * (n - 1) + 1);

        for i in 0..(n - 1) {
            let p1 = points[i];
            let p2 = points[i + 1];

            // Phantom-Punkte an den offenen Enden: Endpunkt duplizieren
            // (flache Tangente), innen die echten Nachbarn.
            let p0 = if i == 0 { points[0] } else { points[i - 1] };
            let p3 = if i == n - 2 { points[n - 1] } else { points[i + 2] };

            // Der Segmentanfang ist der Originalpunkt selbst, nicht sein
            // interpoliertes Abbild.
            curve.push(p1);
            for j in 1..per_edge {
                let t_segment = j as f32 / per_edge as f32;
                curve.push(interpolate_segment(p0, p1, p2, p3, t_segment, self.tension));
            }
        }
        curve.push(points[n - 1]);

        Ok(curve)
    }
}

/// Interpoliert einen Punkt auf dem Segment zwischen `p1` und `p2`.
/// Knoten-Parametrisierung: t_{k+1} = t_k + |p_{k+1} - p_k|^alpha.
fn interpolate_segment(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t_segment: f32, alpha: f32) -> Vec2 {
    let t0 = 0.0;
    let t1 = t0
        + (p1 - p0)
            .length_squared()
            .powf(alpha * 0.5)
            .max(constants::EPSILON);
    let t2 = t1
        + (p2 - p1)
            .length_squared()
            .powf(alpha * 0.5)
            .max(constants::EPSILON);
    let t3 = t2
        + (p3 - p2)
            .length_squared()
            .powf(alpha * 0.5)
            .max(constants::EPSILON);

    let t = comparison::lerp(t1, t2, t_segment);

    // Sichere Division: doppelte Punkte (Phantom-Enden) erzeugen sonst NaN.
    let safe_div = |num: f32, den: f32| -> f32 {
        if comparison::nearly_zero(den) {
            0.0
        } else {
            num / den
        }
    };

    // Pyramidenschema nach Barry/Goldman, siehe
    // https://en.wikipedia.org/wiki/Centripetal_Catmull%E2%80%93Rom_spline
    let a1 = p0 * safe_div(t1 - t, t1 - t0) + p1 * safe_div(t - t0, t1 - t0);
    let a2 = p1 * safe_div(t2 - t, t2 - t1) + p2 * safe_div(t - t1, t2 - t1);
    let a3 = p2 * safe_div(t3 - t, t3 - t2) + p3 * safe_div(t - t2, t3 - t2);

    let b1 = a1 * safe_div(t2 - t, t2 - t0) + a2 * safe_div(t - t0, t2 - t0);
    let b2 = a2 * safe_div(t3 - t, t3 - t1) + a3 * safe_div(t - t1, t3 - t1);

    b1 * safe_div(t2 - t, t2 - t1) + b2 * safe_div(t - t1, t2 - t1)
}
