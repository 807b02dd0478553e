//! Property-based tests for the impact estimator using proptest.
//!
//! These tests verify the scaling law invariants across the full range of
//! inputs the simulator form accepts.

use proptest::prelude::*;

use super::{ImpactInput, ImpactModel, compute};
use crate::test_utils::assertions;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Identical inputs must produce bit-identical results.
    #[test]
    fn prop_compute_is_deterministic(
        diameter_m in 1.0f64..50_000.0,
        velocity_km_s in 0.1f64..75.0,
    ) {
        let input = ImpactInput::new(diameter_m, velocity_km_s);
        let first = compute(&input).expect("valid input");
        let second = compute(&input).expect("valid input");

        prop_assert_eq!(first.energy_joules.to_bits(), second.energy_joules.to_bits());
        prop_assert_eq!(first.crater_diameter_km.to_bits(), second.crater_diameter_km.to_bits());
        prop_assert_eq!(first.blast_radius_km.to_bits(), second.blast_radius_km.to_bits());
        prop_assert_eq!(
            first.seismic_magnitude_mw.to_bits(),
            second.seismic_magnitude_mw.to_bits()
        );
    }

    /// Growing the impactor never shrinks energy, crater or blast radius.
    ///
    /// Holds across the small/large body boundary because the large-body
    /// branch jumps upward there.
    #[test]
    fn prop_monotonic_in_diameter(
        diameter_m in 1.0f64..50_000.0,
        growth in 1.0f64..10.0,
        velocity_km_s in 0.1f64..75.0,
    ) {
        let small = compute(&ImpactInput::new(diameter_m, velocity_km_s)).expect("valid input");
        let large = compute(&ImpactInput::new(diameter_m * growth, velocity_km_s))
            .expect("valid input");

        prop_assert!(large.energy_joules >= small.energy_joules);
        prop_assert!(
            large.crater_diameter_km >= small.crater_diameter_km,
            "crater shrank: {} km -> {} km (d={} m, x{}, v={} km/s)",
            small.crater_diameter_km, large.crater_diameter_km, diameter_m, growth, velocity_km_s
        );
        prop_assert!(large.blast_radius_km >= small.blast_radius_km);
    }

    /// Energy scales as d³·v².
    #[test]
    fn prop_energy_scales_with_diameter_cubed_velocity_squared(
        diameter_m in 1.0f64..10_000.0,
        velocity_km_s in 0.1f64..75.0,
        k_d in 1.0f64..5.0,
        k_v in 1.0f64..5.0,
    ) {
        let base = compute(&ImpactInput::new(diameter_m, velocity_km_s)).expect("valid input");
        let scaled = compute(&ImpactInput::new(diameter_m * k_d, velocity_km_s * k_v))
            .expect("valid input");

        let ratio = scaled.energy_joules / base.energy_joules;
        let expected = k_d.powi(3) * k_v.powi(2);
        prop_assert!(
            ((ratio - expected) / expected).abs() < 1e-9,
            "energy ratio {} != d³v² ratio {}", ratio, expected
        );
    }

    /// The crater is never reported below the floor.
    #[test]
    fn prop_crater_respects_floor(
        diameter_m in 1.0e-3f64..100_000.0,
        velocity_km_s in 1.0e-3f64..100.0,
    ) {
        let model = ImpactModel::default();
        let result = model.compute(&ImpactInput::new(diameter_m, velocity_km_s))
            .expect("valid input");
        prop_assert!(result.crater_diameter_km >= model.crater_floor_km);
        prop_assert!(result.blast_radius_km > 0.0);
        assertions::assert_physical(&result, &model);
    }

    /// All outputs are finite within the form's range.
    #[test]
    fn prop_outputs_finite(
        diameter_m in 1.0f64..100_000.0,
        velocity_km_s in 0.1f64..100.0,
    ) {
        let result = compute(&ImpactInput::new(diameter_m, velocity_km_s)).expect("valid input");
        prop_assert!(result.energy_joules.is_finite());
        prop_assert!(result.energy_megatons_tnt.is_finite());
        prop_assert!(result.crater_diameter_km.is_finite());
        prop_assert!(result.blast_radius_km.is_finite());
        prop_assert!(result.seismic_magnitude_mw.is_finite());
    }

    /// The large-body multiplier always lands inside its clamp.
    #[test]
    fn prop_multiplier_within_clamp(
        diameter_km in 0.05f64..1.0e7,
        velocity_km_s in 0.1f64..100.0,
    ) {
        let model = ImpactModel::default();
        let mult = model.crater_multiplier(diameter_km, velocity_km_s);
        prop_assert!(mult >= model.min_crater_multiplier);
        prop_assert!(mult <= model.max_crater_multiplier);
    }

    /// Non-positive diameters are always rejected.
    #[test]
    fn prop_non_positive_diameter_rejected(
        diameter_m in -1.0e6f64..=0.0,
        velocity_km_s in 0.1f64..75.0,
    ) {
        prop_assert!(compute(&ImpactInput::new(diameter_m, velocity_km_s)).is_err());
    }
}
