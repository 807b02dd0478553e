//! Impact consequence estimation.
//!
//! Turns an impactor's size, speed and density into:
//! - Kinetic energy (joules and megatons of TNT)
//! - Final crater diameter (piecewise empirical scaling, after Collins et al. 2005)
//! - Blast radius (fixed multiple of the crater)
//! - Equivalent seismic moment magnitude
//!
//! Everything here is closed-form arithmetic with no I/O, so `compute` is safe
//! to call from any thread.

mod simulation;

#[cfg(test)]
mod proptest_impact;

use std::f64::consts::PI;

use bevy::prelude::Resource;

use crate::types::{DEFAULT_DENSITY_KG_M3, JOULES_PER_MEGATON_TNT, KM_TO_METERS};

pub use simulation::{ImpactOutcome, ImpactPlugin, LastImpact, SimulateImpact, run_simulation};

/// Errors raised by the impact estimator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("invalid {field}: {value} (must be positive and finite)")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("invalid model constant {field}: {value}")]
    InvalidModel { field: &'static str, value: f64 },
}

/// Physical description of the impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactInput {
    /// Object diameter (m).
    pub diameter_m: f64,
    /// Velocity at impact (km/s).
    pub velocity_km_s: f64,
    /// Bulk density (kg/m³). Rocky asteroids default to 3000.
    pub density_kg_m3: f64,
}

impl ImpactInput {
    /// Create an input for a rocky asteroid.
    pub fn new(diameter_m: f64, velocity_km_s: f64) -> Self {
        Self {
            diameter_m,
            velocity_km_s,
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
        }
    }

    /// Override the bulk density.
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Check that every field is strictly positive and finite.
    pub fn validate(&self) -> Result<(), ImpactError> {
        for (field, value) in [
            ("diameter_m", self.diameter_m),
            ("velocity_km_s", self.velocity_km_s),
            ("density_kg_m3", self.density_kg_m3),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ImpactError::InvalidInput { field, value });
            }
        }
        Ok(())
    }

    /// Diameter in kilometers.
    pub fn diameter_km(&self) -> f64 {
        self.diameter_m / KM_TO_METERS
    }

    /// Mass of a homogeneous sphere with this diameter and density (kg).
    pub fn mass_kg(&self) -> f64 {
        let r = self.diameter_m / 2.0;
        let volume = (4.0 / 3.0) * PI * r.powi(3);
        self.density_kg_m3 * volume
    }

    /// Kinetic energy at impact (J).
    ///
    /// E = ½ m v², with v converted to m/s
    pub fn kinetic_energy_j(&self) -> f64 {
        let v = self.velocity_km_s * KM_TO_METERS;
        0.5 * self.mass_kg() * v * v
    }
}

/// Estimated consequences of a single impact.
///
/// Every field is finite for physically meaningful inputs. Inputs large enough
/// to overflow `f64` (diameters around 1e100 m) yield infinite energy and
/// magnitude instead of an error; the crater stays finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactResult {
    /// Kinetic energy (J).
    pub energy_joules: f64,
    /// Kinetic energy in megatons of TNT.
    pub energy_megatons_tnt: f64,
    /// Final crater diameter (km). Never below the model's crater floor.
    pub crater_diameter_km: f64,
    /// Radius of severe blast damage (km).
    pub blast_radius_km: f64,
    /// Equivalent earthquake moment magnitude (Mw).
    pub seismic_magnitude_mw: f64,
}

/// Which branch of the crater scaling law applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraterRegime {
    /// Sub-50 m bodies: mostly disrupted in the atmosphere, weak velocity dependence.
    SmallBody,
    /// Larger bodies: logarithmic diameter gain with square-root velocity dependence.
    LargeBody,
}

/// Empirical constants of the scaling model.
///
/// The defaults are the published approximation. The blast and magnitude
/// constants in particular are placeholders and can be tuned per instance.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ImpactModel {
    /// Bodies below this diameter (km) use the small-body crater formula.
    pub small_body_limit_km: f64,
    /// Smallest crater diameter ever reported (km).
    pub crater_floor_km: f64,
    /// Crater-to-impactor diameter ratio for small bodies.
    pub small_body_crater_ratio: f64,
    /// Velocity exponent for small bodies.
    pub small_body_velocity_exponent: f64,
    /// Crater multiplier before diameter/velocity gain (large bodies).
    pub base_crater_multiplier: f64,
    /// Gain applied to log10(d_km + 1) (large bodies).
    pub diameter_gain: f64,
    /// Velocity exponent for large bodies.
    pub large_body_velocity_exponent: f64,
    /// Lower clamp for the large-body multiplier.
    pub min_crater_multiplier: f64,
    /// Upper clamp for the large-body multiplier.
    pub max_crater_multiplier: f64,
    /// Velocity the scaling law is normalised to (km/s).
    pub reference_velocity_km_s: f64,
    /// Blast radius as a multiple of crater diameter.
    pub blast_radius_multiplier: f64,
    /// Offset in Mw = (log10 E - offset) / divisor.
    pub magnitude_offset: f64,
    /// Divisor in Mw = (log10 E - offset) / divisor.
    pub magnitude_divisor: f64,
}

impl Default for ImpactModel {
    fn default() -> Self {
        Self {
            small_body_limit_km: 0.05,
            crater_floor_km: 0.001,
            small_body_crater_ratio: 0.6,
            small_body_velocity_exponent: 0.25,
            base_crater_multiplier: 12.0,
            diameter_gain: 4.0,
            large_body_velocity_exponent: 0.5,
            min_crater_multiplier: 3.0,
            max_crater_multiplier: 45.0,
            reference_velocity_km_s: 20.0,
            blast_radius_multiplier: 3.0,
            magnitude_offset: 4.8,
            magnitude_divisor: 1.5,
        }
    }
}

impl ImpactModel {
    /// Check that every constant is finite and the multiplier clamp is ordered.
    ///
    /// # Errors
    /// `ImpactError::InvalidModel` naming the first offending constant.
    pub fn validate(&self) -> Result<(), ImpactError> {
        let constants = [
            ("small_body_limit_km", self.small_body_limit_km),
            ("crater_floor_km", self.crater_floor_km),
            ("small_body_crater_ratio", self.small_body_crater_ratio),
            ("small_body_velocity_exponent", self.small_body_velocity_exponent),
            ("base_crater_multiplier", self.base_crater_multiplier),
            ("diameter_gain", self.diameter_gain),
            ("large_body_velocity_exponent", self.large_body_velocity_exponent),
            ("min_crater_multiplier", self.min_crater_multiplier),
            ("max_crater_multiplier", self.max_crater_multiplier),
            ("reference_velocity_km_s", self.reference_velocity_km_s),
            ("blast_radius_multiplier", self.blast_radius_multiplier),
            ("magnitude_offset", self.magnitude_offset),
            ("magnitude_divisor", self.magnitude_divisor),
        ];
        if let Some(&(field, value)) = constants.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ImpactError::InvalidModel { field, value });
        }

        if self.max_crater_multiplier < self.min_crater_multiplier {
            return Err(ImpactError::InvalidModel {
                field: "max_crater_multiplier",
                value: self.max_crater_multiplier,
            });
        }
        if self.reference_velocity_km_s <= 0.0 {
            return Err(ImpactError::InvalidModel {
                field: "reference_velocity_km_s",
                value: self.reference_velocity_km_s,
            });
        }
        if self.magnitude_divisor == 0.0 {
            return Err(ImpactError::InvalidModel {
                field: "magnitude_divisor",
                value: self.magnitude_divisor,
            });
        }
        Ok(())
    }

    /// Classify an impactor by diameter (km).
    pub fn regime(&self, diameter_km: f64) -> CraterRegime {
        if diameter_km < self.small_body_limit_km {
            CraterRegime::SmallBody
        } else {
            CraterRegime::LargeBody
        }
    }

    /// Large-body crater-to-impactor ratio, after clamping.
    ///
    /// An inverted clamp resolves to the upper bound rather than panicking;
    /// `validate` reports it.
    pub fn crater_multiplier(&self, diameter_km: f64, velocity_km_s: f64) -> f64 {
        let diam_factor = (diameter_km + 1.0).log10() * self.diameter_gain;
        let vel_factor =
            (velocity_km_s / self.reference_velocity_km_s).powf(self.large_body_velocity_exponent);
        (self.base_crater_multiplier + diam_factor * vel_factor)
            .max(self.min_crater_multiplier)
            .min(self.max_crater_multiplier)
    }

    /// Final crater diameter (km) for an impactor of `diameter_km` at `velocity_km_s`.
    pub fn estimate_crater_km(&self, diameter_km: f64, velocity_km_s: f64) -> f64 {
        let crater_km = match self.regime(diameter_km) {
            CraterRegime::SmallBody => {
                let vel_factor = (velocity_km_s / self.reference_velocity_km_s)
                    .powf(self.small_body_velocity_exponent);
                diameter_km * self.small_body_crater_ratio * vel_factor
            }
            CraterRegime::LargeBody => {
                diameter_km * self.crater_multiplier(diameter_km, velocity_km_s)
            }
        };
        crater_km.max(self.crater_floor_km)
    }

    /// Equivalent moment magnitude for an energy release (J).
    ///
    /// Returns 0 for non-positive energy.
    pub fn seismic_magnitude(&self, energy_joules: f64) -> f64 {
        if energy_joules > 0.0 {
            (energy_joules.log10() - self.magnitude_offset) / self.magnitude_divisor
        } else {
            0.0
        }
    }

    /// Estimate all consequences of an impact.
    ///
    /// # Errors
    /// `ImpactError::InvalidInput` if any input is non-positive, NaN or infinite.
    /// `ImpactError::InvalidModel` if the model's constants are unusable.
    pub fn compute(&self, input: &ImpactInput) -> Result<ImpactResult, ImpactError> {
        self.validate()?;
        input.validate()?;

        let energy_joules = input.kinetic_energy_j();
        let crater_diameter_km = self.estimate_crater_km(input.diameter_km(), input.velocity_km_s);

        Ok(ImpactResult {
            energy_joules,
            energy_megatons_tnt: energy_joules / JOULES_PER_MEGATON_TNT,
            crater_diameter_km,
            blast_radius_km: crater_diameter_km * self.blast_radius_multiplier,
            seismic_magnitude_mw: self.seismic_magnitude(energy_joules),
        })
    }
}

/// Estimate impact consequences with the default model.
pub fn compute(input: &ImpactInput) -> Result<ImpactResult, ImpactError> {
    ImpactModel::default().compute(input)
}

/// Crater diameter (km) under the default model.
pub fn estimate_crater_km(diameter_km: f64, velocity_km_s: f64) -> f64 {
    ImpactModel::default().estimate_crater_km(diameter_km, velocity_km_s)
}
