//! Near-Earth Object catalog payloads and the adapter into `ImpactInput`.
//!
//! The remote schema nests everything we need several levels deep, and any
//! level may be missing or `null`, so each level is an `Option` or falls back
//! to its default. `NeoObject::summary` flattens one object into the handful
//! of numbers the simulator uses.

use serde::{Deserialize, Deserializer};

use crate::impact::ImpactInput;

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of the browse endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub near_earth_objects: Vec<NeoObject>,
    pub page: Option<PageInfo>,
}

/// Pagination metadata returned alongside a browse page.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elements: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u64,
}

/// A catalog object as returned by the browse and lookup endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NeoObject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close_approach_data: Vec<CloseApproach>,
}

/// Diameter estimates in several units; only meters are used.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: Option<DiameterRange>,
}

/// Min/max diameter estimate.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

/// A single close approach record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: Option<String>,
    pub relative_velocity: Option<RelativeVelocity>,
}

/// Relative velocity in several units. Values arrive as decimal strings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
}

/// Flattened view of a catalog object.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoSummary {
    /// Catalog id (used for lookups). Empty when the payload had none.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lower diameter estimate (m), 0 if unknown.
    pub diameter_min_m: f64,
    /// Upper diameter estimate (m), 0 if unknown.
    pub diameter_max_m: f64,
    /// Relative velocity at the first listed close approach (km/s).
    pub velocity_km_s: Option<f64>,
    /// Flagged as potentially hazardous by the catalog.
    pub hazardous: bool,
    /// Date of the first listed close approach.
    pub approach_date: Option<String>,
}

impl NeoObject {
    /// Velocity at the first close approach, if present and parseable.
    pub fn first_approach_velocity_km_s(&self) -> Option<f64> {
        self.close_approach_data
            .first()?
            .relative_velocity
            .as_ref()?
            .kilometers_per_second
            .as_deref()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Flatten into a `NeoSummary`. Objects without a name are skipped.
    pub fn summary(&self) -> Option<NeoSummary> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }

        let range = self
            .estimated_diameter
            .as_ref()
            .and_then(|d| d.meters)
            .unwrap_or_default();

        Some(NeoSummary {
            id: self.id.clone().unwrap_or_default(),
            name: name.to_string(),
            diameter_min_m: range.estimated_diameter_min.unwrap_or(0.0),
            diameter_max_m: range.estimated_diameter_max.unwrap_or(0.0),
            velocity_km_s: self.first_approach_velocity_km_s(),
            hazardous: self.is_potentially_hazardous_asteroid.unwrap_or(false),
            approach_date: self
                .close_approach_data
                .first()
                .and_then(|c| c.close_approach_date.clone()),
        })
    }
}

impl NeoSummary {
    /// Single diameter used for simulation: the midpoint of the estimate range.
    ///
    /// Falls back to whichever bound is known when the other is missing.
    pub fn representative_diameter_m(&self) -> f64 {
        match (self.diameter_min_m > 0.0, self.diameter_max_m > 0.0) {
            (true, true) => 0.5 * (self.diameter_min_m + self.diameter_max_m),
            (true, false) => self.diameter_min_m,
            (false, true) => self.diameter_max_m,
            (false, false) => 0.0,
        }
    }

    /// Convert into an estimator input, if the object carries enough data.
    pub fn impact_input(&self) -> Option<ImpactInput> {
        let velocity_km_s = self.velocity_km_s?;
        let input = ImpactInput::new(self.representative_diameter_m(), velocity_km_s);
        input.validate().ok().map(|_| input)
    }
}

impl CatalogPage {
    /// Up to `limit` displayable summaries, in catalog order.
    pub fn summaries(&self, limit: usize) -> Vec<NeoSummary> {
        self.near_earth_objects
            .iter()
            .filter_map(NeoObject::summary)
            .take(limit)
            .collect()
    }
}
