//! Meteor Impact - asteroid impact consequence estimator
//!
//! A library crate providing the impact scaling model, the Near-Earth Object
//! catalog adapter, and the Bevy plugins the desktop app is assembled from.

pub mod catalog;
pub mod impact;
pub mod types;
pub mod ui;

pub use impact::{
    CraterRegime, ImpactError, ImpactInput, ImpactModel, ImpactResult, compute, estimate_crater_km,
};

#[cfg(test)]
pub mod test_utils;
