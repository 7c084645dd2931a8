// src/ui.rs

use crate::catalog::{Catalog, GlazeMaterial, PatternTemplate, ShapeProfile};
use crate::config::{
    ApplyConfigEvent, ConfigPatch, ConsultationRequestEvent, PotteryConfiguration,
    RandomizeRequestEvent,
};
use crate::debug::profile_svg::SvgExportRequest;
use crate::geometry::deform::{FACTOR_MAX, FACTOR_MIN};
use crate::interaction::{MoldingCommand, StudioMode};
use crate::math::utils::hexcolor;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui::Window};

fn patch_shape(id: &str) -> ConfigPatch {
    ConfigPatch {
        shape_id: Some(id.to_string()),
        ..Default::default()
    }
}

fn patch_glaze(id: &str) -> ConfigPatch {
    ConfigPatch {
        glaze_id: Some(id.to_string()),
        ..Default::default()
    }
}

fn patch_pattern(id: &str) -> ConfigPatch {
    ConfigPatch {
        pattern_id: Some(id.to_string()),
        ..Default::default()
    }
}

pub fn studio_control_ui_system(
    mut contexts: EguiContexts,
    config: Res<PotteryConfiguration>,
    shapes: Res<Catalog<ShapeProfile>>,
    glazes: Res<Catalog<GlazeMaterial>>,
    patterns: Res<Catalog<PatternTemplate>>,
    mode: Res<State<StudioMode>>,
    mut apply: EventWriter<ApplyConfigEvent>,
    mut randomize: EventWriter<RandomizeRequestEvent>,
    mut consult: EventWriter<ConsultationRequestEvent>,
    mut molding: EventWriter<MoldingCommand>,
    mut svg_export: EventWriter<SvgExportRequest>,
) {
    Window::new("Töpferwerkstatt")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.collapsing("Form", |ui| {
                for shape in shapes.iter() {
                    let selected = config.shape_id == shape.id;
                    if ui.selectable_label(selected, shape.name).clicked() && !selected {
                        apply.send(ApplyConfigEvent(patch_shape(shape.id)));
                    }
                }
            });

            ui.collapsing("Glasur", |ui| {
                for glaze in glazes.iter() {
                    let selected = config.glaze_id == glaze.id;
                    if ui.selectable_label(selected, glaze.name).clicked() && !selected {
                        apply.send(ApplyConfigEvent(patch_glaze(glaze.id)));
                    }
                }
            });

            ui.collapsing("Muster", |ui| {
                for pattern in patterns.iter() {
                    let selected = config.pattern_id == pattern.id;
                    if ui.selectable_label(selected, pattern.name).clicked() && !selected {
                        apply.send(ApplyConfigEvent(patch_pattern(pattern.id)));
                    }
                }
                if config.pattern_id != "none" {
                    let mut rgb = hexcolor::parse_hex_rgb(&config.tint_color)
                        .unwrap_or([0xff, 0xff, 0xff]);
                    ui.horizontal(|ui| {
                        ui.label("Musterfarbe:");
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            apply.send(ApplyConfigEvent(ConfigPatch {
                                tint_color: Some(hexcolor::format_hex_rgb(rgb)),
                                ..Default::default()
                            }));
                        }
                    });
                }
            });

            ui.separator();

            match mode.get() {
                StudioMode::Viewing => {
                    if ui.button("🖐 Formen beginnen").clicked() {
                        molding.send(MoldingCommand::Enter);
                    }
                }
                StudioMode::Molding => {
                    let factors = &config.deformation_factors;
                    ui.label(format!(
                        "Höhe {:.2} · Fuß {:.2} · Bauch {:.2} · Hals {:.2}  (Bereich {FACTOR_MIN}–{FACTOR_MAX})",
                        factors.height, factors.base, factors.body, factors.neck
                    ));
                    ui.horizontal(|ui| {
                        if ui.button("✔ Übernehmen").clicked() {
                            molding.send(MoldingCommand::Confirm);
                        }
                        if ui.button("✖ Verwerfen").clicked() {
                            molding.send(MoldingCommand::Cancel);
                        }
                    });
                    ui.small("Linke Taste zieht an den Griffen; Höhe vertikal, Bänder horizontal.");
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("🎲 Zufällige Kombination").clicked() {
                    randomize.send(RandomizeRequestEvent);
                }
                if ui.button("💬 Beratung anfragen").clicked() {
                    consult.send(ConsultationRequestEvent(config.clone()));
                }
            });

            ui.collapsing("Werkzeuge", |ui| {
                if ui.button("Silhouette als SVG sichern").clicked() {
                    svg_export.send(SvgExportRequest);
                }
                ui.small("Kamera: rechte Taste Orbit, mittlere Taste Pan, Rad Zoom.");
            });
        });
}
