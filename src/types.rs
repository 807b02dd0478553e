//! Shared constants and session types for the impact simulator.

use bevy::prelude::*;

/// Physical constants and unit conversions (SI units)

/// Kilometers to meters
pub const KM_TO_METERS: f64 = 1000.0;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

/// Bulk density of a rocky (stony) asteroid (kg/m³)
pub const DEFAULT_DENSITY_KG_M3: f64 = 3000.0;

/// Smallest diameter accepted by the simulator form (m)
pub const MIN_DIAMETER_M: f64 = 1.0;

/// Slowest impact velocity accepted by the simulator form (km/s)
pub const MIN_VELOCITY_KM_S: f64 = 0.1;

/// Diameter preloaded into the simulator form (m)
pub const DEFAULT_DIAMETER_M: f64 = 100.0;

/// Velocity preloaded into the simulator form (km/s)
pub const DEFAULT_VELOCITY_KM_S: f64 = 20.0;

/// Where the current simulator inputs came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InputSource {
    /// Typed into the form by the user.
    #[default]
    Manual,
    /// Copied from a catalog entry.
    Catalog {
        /// Catalog designation of the object.
        name: String,
    },
}

/// Values currently shown in the simulator form.
#[derive(Resource, Clone, Debug)]
pub struct SimulatorInputs {
    /// Object diameter in meters
    pub diameter_m: f64,
    /// Impact velocity in km/s
    pub velocity_km_s: f64,
    /// Origin of the current values
    pub source: InputSource,
}

impl Default for SimulatorInputs {
    fn default() -> Self {
        Self {
            diameter_m: DEFAULT_DIAMETER_M,
            velocity_km_s: DEFAULT_VELOCITY_KM_S,
            source: InputSource::Manual,
        }
    }
}

impl SimulatorInputs {
    /// Raise both values to the form minimums.
    ///
    /// NaN collapses to the minimum as well, so the result is always usable.
    pub fn clamp_to_minimums(&mut self) {
        if self.diameter_m.is_nan() || self.diameter_m < MIN_DIAMETER_M {
            self.diameter_m = MIN_DIAMETER_M;
        }
        if self.velocity_km_s.is_nan() || self.velocity_km_s < MIN_VELOCITY_KM_S {
            self.velocity_km_s = MIN_VELOCITY_KM_S;
        }
    }

    /// Replace the form values with a catalog object's.
    pub fn load_from_catalog(&mut self, name: &str, diameter_m: f64, velocity_km_s: f64) {
        self.diameter_m = diameter_m;
        self.velocity_km_s = velocity_km_s;
        self.source = InputSource::Catalog {
            name: name.to_string(),
        };
        self.clamp_to_minimums();
    }
}
