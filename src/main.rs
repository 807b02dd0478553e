//! Meteor Impact - asteroid impact simulator
//!
//! A desktop application that estimates impact energy, crater size, blast
//! radius and seismic magnitude, with Near-Earth Object catalog browsing.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use meteor_impact::catalog::CatalogPlugin;
use meteor_impact::impact::ImpactPlugin;
use meteor_impact::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Meteor Impact Simulator".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Catalog selections feed the simulator inputs owned by ImpactPlugin
        .add_plugins((ImpactPlugin, CatalogPlugin, UiPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

/// egui attaches its primary context to the first camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
