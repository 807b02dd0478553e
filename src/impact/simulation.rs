//! Bevy wiring for the impact estimator.
//!
//! The UI (or a catalog selection) fires `SimulateImpact`; `run_simulation`
//! reads the current `SimulatorInputs`, runs the model and stores the outcome
//! in `LastImpact` for display.

use bevy::prelude::*;

use super::{ImpactError, ImpactInput, ImpactModel, ImpactResult};
use crate::types::{InputSource, SimulatorInputs};

/// Message requesting a simulation run with the current form inputs.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct SimulateImpact;

/// A completed simulation run: the input used and what the model returned.
#[derive(Clone, Debug)]
pub struct ImpactOutcome {
    /// Input passed to the model (after clamping to form minimums).
    pub input: ImpactInput,
    /// Where the input came from.
    pub source: InputSource,
    /// Model output, or the validation error.
    pub result: Result<ImpactResult, ImpactError>,
}

/// Resource holding the most recent simulation outcome.
#[derive(Resource, Default)]
pub struct LastImpact {
    /// Most recent outcome, if any simulation has run.
    pub outcome: Option<ImpactOutcome>,
}

impl LastImpact {
    /// The latest successful result, if any.
    pub fn result(&self) -> Option<&ImpactResult> {
        self.outcome.as_ref().and_then(|o| o.result.as_ref().ok())
    }
}

/// Run the model for every pending `SimulateImpact` message.
///
/// Several requests in the same frame collapse into one run since they would
/// all read the same inputs.
pub fn run_simulation(
    mut requests: MessageReader<SimulateImpact>,
    mut inputs: ResMut<SimulatorInputs>,
    model: Res<ImpactModel>,
    mut last_impact: ResMut<LastImpact>,
) {
    if requests.read().next().is_none() {
        return;
    }
    requests.clear();

    inputs.clamp_to_minimums();
    let input = ImpactInput::new(inputs.diameter_m, inputs.velocity_km_s);
    let result = model.compute(&input);

    match &result {
        Ok(r) => info!(
            "Impact of {:.1} m body at {:.2} km/s: {:.2} Mt TNT, crater {:.3} km, blast {:.3} km, Mw {:.2}",
            input.diameter_m,
            input.velocity_km_s,
            r.energy_megatons_tnt,
            r.crater_diameter_km,
            r.blast_radius_km,
            r.seismic_magnitude_mw,
        ),
        Err(e) => warn!("Impact simulation rejected: {e}"),
    }

    last_impact.outcome = Some(ImpactOutcome {
        input,
        source: inputs.source.clone(),
        result,
    });
}

/// Plugin providing the impact estimator to the app.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SimulateImpact>()
            .init_resource::<ImpactModel>()
            .init_resource::<SimulatorInputs>()
            .init_resource::<LastImpact>()
            .add_systems(Update, run_simulation);
    }
}
