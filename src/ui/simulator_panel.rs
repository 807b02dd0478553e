//! Impact simulator form and result metrics.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::format::{format_fixed, format_thousands};
use super::icons;
use crate::impact::{ImpactResult, LastImpact, SimulateImpact};
use crate::types::{
    DEFAULT_DENSITY_KG_M3, InputSource, MIN_DIAMETER_M, MIN_VELOCITY_KM_S, SimulatorInputs,
};

/// Colors for the simulator panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(85, 221, 136);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const METRIC: Color32 = Color32::from_rgb(220, 220, 230);
}

/// System that renders the simulator in the central panel.
pub fn simulator_panel_system(
    mut contexts: EguiContexts,
    mut inputs: ResMut<SimulatorInputs>,
    last_impact: Res<LastImpact>,
    mut simulate: MessageWriter<SimulateImpact>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(format!("{} Meteor Impact Simulator", icons::IMPACT));
        ui.add_space(8.0);

        render_inputs(ui, &mut inputs);

        ui.add_space(8.0);
        if ui
            .button(egui::RichText::new("Simulate Impact").size(16.0))
            .clicked()
        {
            simulate.write(SimulateImpact);
        }

        ui.add_space(12.0);
        render_outcome(ui, &last_impact);
    });
}

/// Render diameter and velocity fields. Editing either marks the inputs as manual.
fn render_inputs(ui: &mut egui::Ui, inputs: &mut SimulatorInputs) {
    egui::Grid::new("impact_inputs")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Asteroid diameter");
            let diameter = ui.add(
                egui::DragValue::new(&mut inputs.diameter_m)
                    .range(MIN_DIAMETER_M..=f64::MAX)
                    .speed(1.0)
                    .suffix(" m"),
            );
            ui.end_row();

            ui.label("Velocity");
            let velocity = ui.add(
                egui::DragValue::new(&mut inputs.velocity_km_s)
                    .range(MIN_VELOCITY_KM_S..=f64::MAX)
                    .speed(0.1)
                    .suffix(" km/s"),
            );
            ui.end_row();

            ui.label("Density");
            ui.label(format!("{DEFAULT_DENSITY_KG_M3:.0} kg/m³ (rocky)"));
            ui.end_row();

            if diameter.changed() || velocity.changed() {
                inputs.source = InputSource::Manual;
            }
        });

    if let InputSource::Catalog { name } = &inputs.source {
        ui.label(egui::RichText::new(format!("Loaded from catalog: {name}")).weak());
    }
}

/// Render the latest result or validation error.
fn render_outcome(ui: &mut egui::Ui, last_impact: &LastImpact) {
    let Some(outcome) = &last_impact.outcome else {
        return;
    };

    match &outcome.result {
        Ok(result) => {
            ui.colored_label(
                colors::SUCCESS,
                format!("{} Simulation complete", icons::SUCCESS),
            );
            ui.add_space(6.0);
            render_metrics(ui, result);
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Approximation based on simplified impact scaling (Collins et al., 2005)",
                )
                .weak()
                .italics(),
            );
        }
        Err(e) => {
            ui.colored_label(colors::ERROR, format!("{} {e}", icons::WARNING));
        }
    }
}

/// Display rows for the four headline metrics.
pub fn metric_rows(result: &ImpactResult) -> [(&'static str, &'static str, String); 4] {
    [
        (
            icons::ENERGY,
            "Estimated energy (Megatons TNT)",
            format_thousands(result.energy_megatons_tnt, 2),
        ),
        (
            icons::CRATER,
            "Crater diameter (km)",
            format_thousands(result.crater_diameter_km, 2),
        ),
        (
            icons::BLAST,
            "Blast radius (km)",
            format_thousands(result.blast_radius_km, 2),
        ),
        (
            icons::SEISMIC,
            "Equivalent earthquake magnitude (Mw)",
            format_fixed(result.seismic_magnitude_mw, 2),
        ),
    ]
}

fn render_metrics(ui: &mut egui::Ui, result: &ImpactResult) {
    egui::Grid::new("impact_metrics")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            for (icon, label, value) in metric_rows(result) {
                ui.label(format!("{icon} {label}"));
                ui.label(
                    egui::RichText::new(value)
                        .strong()
                        .size(20.0)
                        .color(colors::METRIC),
                );
                ui.end_row();
            }
        });
}
