//! Test utilities for impact estimator tests.
//!
//! Provides fixtures for well-known impactors and assertions for the
//! invariants every `ImpactResult` must satisfy.

use crate::impact::{ImpactInput, ImpactModel, ImpactResult};

/// Fixtures for commonly referenced impactors.
///
/// Sizes and speeds are the usual order-of-magnitude estimates, not fits.
pub mod fixtures {
    use super::*;

    /// Chelyabinsk 2013 airburst: ~20 m at ~19 km/s.
    pub fn chelyabinsk() -> ImpactInput {
        ImpactInput::new(20.0, 19.0)
    }

    /// Tunguska 1908: ~60 m at ~15 km/s.
    pub fn tunguska() -> ImpactInput {
        ImpactInput::new(60.0, 15.0)
    }

    /// Barringer (Meteor Crater) impactor: ~50 m iron at ~12.8 km/s.
    pub fn barringer() -> ImpactInput {
        ImpactInput::new(50.0, 12.8).with_density(7800.0)
    }

    /// Chicxulub impactor: ~10 km at ~20 km/s.
    pub fn chicxulub() -> ImpactInput {
        ImpactInput::new(10_000.0, 20.0)
    }
}

/// Assertions for verifying result invariants.
pub mod assertions {
    use super::*;

    /// Relative difference between two values.
    pub fn relative_drift(expected: f64, actual: f64) -> f64 {
        if expected.abs() > 1e-300 {
            ((actual - expected) / expected).abs()
        } else {
            (actual - expected).abs()
        }
    }

    /// Assert every field is finite and respects the model's floor and multipliers.
    ///
    /// # Panics
    /// Panics on the first violated invariant.
    pub fn assert_physical(result: &ImpactResult, model: &ImpactModel) {
        assert!(result.energy_joules.is_finite() && result.energy_joules >= 0.0);
        assert!(result.energy_megatons_tnt.is_finite() && result.energy_megatons_tnt >= 0.0);
        assert!(
            result.crater_diameter_km >= model.crater_floor_km,
            "crater {} km below floor {} km",
            result.crater_diameter_km,
            model.crater_floor_km
        );
        assert!(result.seismic_magnitude_mw.is_finite());

        let drift = relative_drift(
            result.crater_diameter_km * model.blast_radius_multiplier,
            result.blast_radius_km,
        );
        assert!(drift < 1e-12, "blast radius drifted from crater multiple: {drift:e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::{CraterRegime, compute};

    #[test]
    fn test_fixtures_are_valid() {
        let model = ImpactModel::default();
        for input in [
            fixtures::chelyabinsk(),
            fixtures::tunguska(),
            fixtures::barringer(),
            fixtures::chicxulub(),
        ] {
            let result = model.compute(&input).expect("fixture is valid");
            assertions::assert_physical(&result, &model);
        }
    }

    #[test]
    fn test_fixture_regimes() {
        let model = ImpactModel::default();
        assert_eq!(
            model.regime(fixtures::chelyabinsk().diameter_km()),
            CraterRegime::SmallBody
        );
        // Exactly on the boundary: large-body branch
        assert_eq!(
            model.regime(fixtures::barringer().diameter_km()),
            CraterRegime::LargeBody
        );
        assert_eq!(
            model.regime(fixtures::chicxulub().diameter_km()),
            CraterRegime::LargeBody
        );
    }

    #[test]
    fn test_chicxulub_order_of_magnitude() {
        let result = compute(&fixtures::chicxulub()).expect("fixture is valid");
        // ~3.1e23 J ≈ 7.5e7 Mt
        assert!(result.energy_joules > 1e23 && result.energy_joules < 1e24);
        assert!(result.energy_megatons_tnt > 1e7 && result.energy_megatons_tnt < 1e8);
        // mult = 12 + 4·log10(11) ≈ 16.17 -> ~162 km
        assert!((result.crater_diameter_km - 161.7).abs() < 1.0);
    }

    #[test]
    fn test_relative_drift() {
        assert_eq!(assertions::relative_drift(2.0, 2.0), 0.0);
        assert!((assertions::relative_drift(100.0, 101.0) - 0.01).abs() < 1e-12);
        assert_eq!(assertions::relative_drift(0.0, 0.5), 0.5);
    }
}
