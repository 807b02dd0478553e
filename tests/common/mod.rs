//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use meteor_impact::catalog::{CatalogError, CatalogPlugin, CatalogSettings};
use meteor_impact::impact::ImpactPlugin;

/// Relative difference between two values.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// Create a minimal Bevy app for testing without rendering.
pub fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Headless app with the simulator and catalog plugins.
///
/// The catalog starts disabled so no test reaches the network by accident.
pub fn create_simulator_app() -> App {
    create_simulator_app_with(CatalogSettings::disabled(CatalogError::MissingApiKey))
}

/// Headless app with the simulator and catalog plugins using `settings`.
pub fn create_simulator_app_with(settings: CatalogSettings) -> App {
    let mut app = create_minimal_app();
    app.insert_resource(settings);
    app.add_plugins((ImpactPlugin, CatalogPlugin));
    app
}
