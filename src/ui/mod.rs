//! UI module providing the egui-based interface.
//!
//! Two panels: the catalog browser on the left and the simulator with its
//! result metrics in the remaining space.

mod catalog_panel;
pub mod format;
pub mod icons;
mod simulator_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use catalog_panel::{CatalogPanelState, entry_lines};
pub use simulator_panel::metric_rows;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<CatalogPanelState>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Side panels have to be laid out before the central panel
                    catalog_panel::catalog_panel_system,
                    simulator_panel::simulator_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
