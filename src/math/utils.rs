// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON;
    pub const TAU: f32 = std::f32::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Framerate-unabhängige Dämpfung für Animationen.
///
/// Explizite Funktion (current, target, lambda, dt) -> next, damit pro Frame
/// genau ein Aufruf stattfindet und kein versteckter Zustand mitläuft.
pub mod damping {
    use bevy::math::Vec3;

    /// Exponentielle Annäherung an `target`. `lambda` ist die
    /// Dämpfungskonstante: höhere Werte ziehen schneller an.
    pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
        current + (target - current) * (1.0 - (-lambda * dt).exp())
    }

    /// Komponentenweise Variante für Positionen.
    pub fn damp_vec3(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
        let t = 1.0 - (-lambda * dt).exp();
        current + (target - current) * t
    }
}

/// Hex-Farbstrings ("#rrggbb"), das öffentliche Tint-Format des Studios.
pub mod hexcolor {
    /// Parst einen 6-stelligen Hex-String, mit oder ohne führendes '#'.
    /// Gibt `None` bei jedem anderen Format zurück.
    pub fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some([r, g, b])
    }

    pub fn format_hex_rgb(rgb: [u8; 3]) -> String {
        format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
    }

    pub fn is_valid_hex_rgb(value: &str) -> bool {
        parse_hex_rgb(value).is_some()
    }
}
