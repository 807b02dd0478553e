//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Catalog / satellite icon
pub const CATALOG: &str = egui_phosphor::regular::PLANET;
/// Download / fetch icon
pub const FETCH: &str = egui_phosphor::regular::CLOUD_ARROW_DOWN;
/// Search icon
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
/// Impact icon
pub const IMPACT: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Energy icon
pub const ENERGY: &str = egui_phosphor::regular::LIGHTNING;
/// Crater icon
pub const CRATER: &str = egui_phosphor::regular::CIRCLE_DASHED;
/// Blast radius icon
pub const BLAST: &str = egui_phosphor::regular::CROSSHAIR;
/// Seismic icon
pub const SEISMIC: &str = egui_phosphor::regular::WAVE_SINE;

// Status icons
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Success/check icon
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
