//! Near-Earth Object browser.
//!
//! Lists the first catalog page, supports lookups by id, and lets the user
//! send any entry with a known size and velocity to the simulator.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::catalog::{
    CatalogSettings, CatalogState, FetchCatalog, LookupNeo, NeoSummary, UseCatalogEntry,
};

/// Colors for the catalog panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(85, 221, 136);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const HAZARD: Color32 = Color32::from_rgb(221, 170, 85);
}

/// Text entered in the lookup field.
#[derive(Resource, Default)]
pub struct CatalogPanelState {
    pub lookup_id: String,
}

/// Messages the catalog panel can emit in one frame.
#[derive(Default)]
struct PanelActions {
    fetch: bool,
    lookup: Option<String>,
    selected: Option<NeoSummary>,
}

/// System that renders the catalog browser in a left side panel.
pub fn catalog_panel_system(
    mut contexts: EguiContexts,
    settings: Res<CatalogSettings>,
    state: Res<CatalogState>,
    mut panel: ResMut<CatalogPanelState>,
    mut fetch: MessageWriter<FetchCatalog>,
    mut lookup: MessageWriter<LookupNeo>,
    mut use_entry: MessageWriter<UseCatalogEntry>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut actions = PanelActions::default();

    egui::SidePanel::left("catalog_panel")
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.heading(format!("{} Near-Earth Objects", icons::CATALOG));
            ui.add_space(6.0);

            let unavailable = settings.unavailable_reason();
            if let Some(reason) = &unavailable {
                ui.colored_label(colors::ERROR, format!("{} {reason}", icons::WARNING));
            }
            let enabled = unavailable.is_none() && !state.is_loading();

            if ui
                .add_enabled(
                    enabled,
                    egui::Button::new(format!("{} Fetch latest NEO data", icons::FETCH)),
                )
                .clicked()
            {
                actions.fetch = true;
            }

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut panel.lookup_id)
                        .hint_text("Catalog id, e.g. 3542519")
                        .desired_width(180.0),
                );
                if ui
                    .add_enabled(enabled, egui::Button::new(icons::SEARCH))
                    .on_hover_text("Look up by id")
                    .clicked()
                {
                    actions.lookup = Some(panel.lookup_id.clone());
                }
            });

            ui.separator();
            render_state(ui, &state, &mut actions);
        });

    if actions.fetch {
        fetch.write(FetchCatalog);
    }
    if let Some(id) = actions.lookup {
        lookup.write(LookupNeo { id });
    }
    if let Some(entry) = actions.selected {
        use_entry.write(UseCatalogEntry(entry));
    }
}

fn render_state(ui: &mut egui::Ui, state: &CatalogState, actions: &mut PanelActions) {
    match state {
        CatalogState::Idle => {
            ui.label(egui::RichText::new("No catalog data loaded").weak());
        }
        CatalogState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Fetching catalog data...");
            });
        }
        CatalogState::Failed(message) => {
            ui.colored_label(
                colors::ERROR,
                format!("{} Failed to fetch data: {message}", icons::WARNING),
            );
        }
        CatalogState::Loaded(entries) => {
            ui.colored_label(
                colors::SUCCESS,
                format!("{} Fetched {} objects", icons::SUCCESS, entries.len()),
            );
            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in entries {
                    render_entry(ui, entry, actions);
                    ui.separator();
                }
            });
        }
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &NeoSummary, actions: &mut PanelActions) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&entry.name).strong());
        if entry.hazardous {
            ui.colored_label(colors::HAZARD, icons::WARNING)
                .on_hover_text("Potentially hazardous");
        }
    });

    for line in entry_lines(entry) {
        ui.label(line);
    }

    let usable = entry.impact_input().is_some();
    let button = ui
        .add_enabled(usable, egui::Button::new(format!("{} Simulate", icons::IMPACT)))
        .on_disabled_hover_text("Needs a known diameter and velocity");
    if button.clicked() {
        actions.selected = Some(entry.clone());
    }
}

/// Detail lines shown under an entry's name.
pub fn entry_lines(entry: &NeoSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Diameter: {:.2}–{:.2} m",
        entry.diameter_min_m, entry.diameter_max_m
    )];
    if let Some(v) = entry.velocity_km_s {
        lines.push(format!("Velocity: {v:.2} km/s"));
    }
    if let Some(date) = &entry.approach_date {
        lines.push(format!("Close approach: {date}"));
    }
    lines
}
