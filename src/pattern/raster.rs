// src/pattern/raster.rs

use crate::catalog::{MotifElement, PatternTemplate};
use crate::error::{StudioError, StudioResult};
use crate::math::utils::constants;
use bevy::math::Vec2;
use bevy::render::{
    render_asset::RenderAssetUsages,
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::{Image, ImageAddressMode, ImageSampler, ImageSamplerDescriptor},
};

/// Kantenlänge der gerasterten Motiv-Kachel.
pub const RASTER_SIZE: u32 = 128;
/// Supersampling-Raster pro Pixelachse (2×2 = 4 Abtastungen).
const SUPERSAMPLES: u32 = 2;

/// Rastert ein Motiv mit dem gegebenen Tint in eine RGBA8-Textur:
/// RGB = Tint, Alpha = Abdeckung der Motivgeometrie.
///
/// Fehlgeformte Motivdaten (leeres Motiv, Polygon mit < 3 Punkten,
/// Scheibe ohne Radius) ergeben `TextureEncoding`; der Aufrufer degradiert
/// dann auf den transparenten Platzhalter statt das Rendering anzuhalten.
pub fn rasterize_motif(template: &PatternTemplate, tint: [u8; 3]) -> StudioResult<Image> {
    validate_motif(template)?;

    let size = RASTER_SIZE;
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let inv = 1.0 / size as f32;
    let sub_step = 1.0 / SUPERSAMPLES as f32;

    for py in 0..size {
        for px in 0..size {
            let mut hits = 0u32;
            for sy in 0..SUPERSAMPLES {
                for sx in 0..SUPERSAMPLES {
                    let sample = Vec2::new(
                        (px as f32 + (sx as f32 + 0.5) * sub_step) * inv,
                        // Bildzeile 0 ist oben, Zellkoordinate y wächst nach oben
                        1.0 - (py as f32 + (sy as f32 + 0.5) * sub_step) * inv,
                    );
                    if covers(&template.elements, sample) {
                        hits += 1;
                    }
                }
            }
            let alpha = (hits * 255 / (SUPERSAMPLES * SUPERSAMPLES)) as u8;
            data.extend_from_slice(&[tint[0], tint[1], tint[2], alpha]);
        }
    }

    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.sampler = repeat_sampler();
    Ok(image)
}

/// 1×1 voll transparenter Platzhalter — das Degradationsziel bei
/// Encoding-Fehlern, damit der Render-Loop nie stehen bleibt.
pub fn fallback_image() -> Image {
    let mut image = Image::new(
        Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        vec![0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.sampler = repeat_sampler();
    image
}

fn repeat_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::default()
    })
}

fn validate_motif(template: &PatternTemplate) -> StudioResult<()> {
    let encoding_error = |reason: String| StudioError::TextureEncoding {
        id: template.id.to_string(),
        reason,
    };
    if template.elements.is_empty() {
        return Err(encoding_error("motif has no elements".to_string()));
    }
    for (i, element) in template.elements.iter().enumerate() {
        match element {
            MotifElement::Polygon(points) => {
                if points.len() < 3 {
                    return Err(encoding_error(format!(
                        "polygon {} has {} vertices",
                        i,
                        points.len()
                    )));
                }
                if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                    return Err(encoding_error(format!("polygon {i} has non-finite vertex")));
                }
            }
            MotifElement::Disc { radius, .. } => {
                if *radius <= 0.0 || !radius.is_finite() {
                    return Err(encoding_error(format!("disc {i} has radius {radius}")));
                }
            }
        }
    }
    Ok(())
}

fn covers(elements: &[MotifElement], point: Vec2) -> bool {
    elements.iter().any(|element| match element {
        MotifElement::Polygon(points) => polygon_contains(points, point),
        MotifElement::Disc { center, radius } => {
            point.distance_squared(*center) <= radius * radius
        }
    })
}

/// Ray-Casting-Test für einfache Polygone. EPSILON im Nenner fängt
/// horizontale Kanten ab (Division durch Null).
fn polygon_contains(vertices: &[Vec2], point: Vec2) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        let intersect = ((vi.y > point.y) != (vj.y > point.y))
            && (point.x
                < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y + constants::EPSILON) + vi.x);
        if intersect {
            inside = !inside;
        }
        j = i;
    }
    inside
}
