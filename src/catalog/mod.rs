//! Near-Earth Object catalog integration.
//!
//! Sits outside the impact estimator: it fetches catalog data, narrows each
//! object to a diameter and velocity, and hands those to the simulator form.
//!
//! Requests run on the IO task pool. `CatalogState` tracks progress for the UI.

pub mod client;
pub mod config;
pub mod model;

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};

use crate::impact::{SimulateImpact, run_simulation};
use crate::types::SimulatorInputs;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use model::{CatalogPage, NeoObject, NeoSummary};

/// Number of objects shown from a browse page.
pub const DISPLAY_LIMIT: usize = 10;

/// Errors from configuring or querying the catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("no API key configured (set NASA_API_KEY)")]
    MissingApiKey,

    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("catalog id is empty")]
    EmptyId,

    #[error("invalid catalog id {0:?}")]
    InvalidId(String),
}

/// Catalog configuration captured once at startup.
///
/// Holds the configuration error instead of a config when the environment is
/// incomplete, so the UI can explain why fetching is unavailable.
#[derive(Resource)]
pub struct CatalogSettings {
    pub config: Result<CatalogConfig, CatalogError>,
}

impl CatalogSettings {
    /// Settings read from the process environment.
    pub fn from_env() -> Self {
        Self {
            config: CatalogConfig::from_env(),
        }
    }

    /// Settings with an explicit configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config: Ok(config) }
    }

    /// Settings with fetching disabled.
    pub fn disabled(reason: CatalogError) -> Self {
        Self { config: Err(reason) }
    }

    /// Why fetching is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<String> {
        self.config.as_ref().err().map(ToString::to_string)
    }
}

/// Message requesting the first browse page.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct FetchCatalog;

/// Message requesting a single object by id.
#[derive(Message, Clone, Debug)]
pub struct LookupNeo {
    pub id: String,
}

/// Message copying a catalog entry into the simulator and running it.
#[derive(Message, Clone, Debug)]
pub struct UseCatalogEntry(pub NeoSummary);

/// Progress of the most recent catalog request.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The request finished; entries are in catalog order.
    Loaded(Vec<NeoSummary>),
    /// The request failed with this message.
    Failed(String),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }
}

/// A pending catalog request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogRequest {
    Browse,
    Lookup(String),
}

/// In-flight request task, if any.
#[derive(Resource, Default)]
pub struct CatalogTask(pub Option<Task<Result<Vec<NeoSummary>, CatalogError>>>);

/// Perform a catalog request synchronously.
pub fn fetch_summaries(
    config: CatalogConfig,
    request: CatalogRequest,
) -> Result<Vec<NeoSummary>, CatalogError> {
    let client = CatalogClient::new(config)?;
    match request {
        CatalogRequest::Browse => Ok(client.browse()?.summaries(DISPLAY_LIMIT)),
        CatalogRequest::Lookup(id) => Ok(client.lookup(&id)?.summary().into_iter().collect()),
    }
}

/// Start a request for the latest `FetchCatalog` / `LookupNeo` message.
///
/// A lookup in the same frame wins over a browse. Starting a request drops
/// (and so cancels) any request still in flight.
pub fn start_catalog_requests(
    mut fetches: MessageReader<FetchCatalog>,
    mut lookups: MessageReader<LookupNeo>,
    settings: Res<CatalogSettings>,
    mut state: ResMut<CatalogState>,
    mut task: ResMut<CatalogTask>,
) {
    let wants_browse = fetches.read().next().is_some();
    fetches.clear();
    let lookup = lookups.read().last().map(|l| l.id.clone());

    let request = match (lookup, wants_browse) {
        (Some(id), _) => match client::validate_id(&id) {
            Ok(id) => CatalogRequest::Lookup(id.to_string()),
            Err(e) => {
                warn!("Catalog lookup rejected: {e}");
                *state = CatalogState::Failed(e.to_string());
                return;
            }
        },
        (None, true) => CatalogRequest::Browse,
        (None, false) => return,
    };

    let config = match &settings.config {
        Ok(config) => config.clone(),
        Err(e) => {
            warn!("Catalog unavailable: {e}");
            *state = CatalogState::Failed(e.to_string());
            return;
        }
    };

    info!("Requesting catalog data: {:?}", request);
    let pool = IoTaskPool::get();
    task.0 = Some(pool.spawn(async move { fetch_summaries(config, request) }));
    *state = CatalogState::Loading;
}

/// Move a finished request into `CatalogState`.
pub fn poll_catalog_task(mut task: ResMut<CatalogTask>, mut state: ResMut<CatalogState>) {
    let Some(pending) = task.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(future::poll_once(pending)) else {
        return;
    };
    task.0 = None;

    *state = match result {
        Ok(entries) => {
            info!("Fetched {} catalog objects", entries.len());
            CatalogState::Loaded(entries)
        }
        Err(e) => {
            warn!("Failed to fetch catalog data: {e}");
            CatalogState::Failed(e.to_string())
        }
    };
}

/// Copy selected catalog entries into the simulator form and run them.
pub fn apply_catalog_selection(
    mut selections: MessageReader<UseCatalogEntry>,
    mut inputs: ResMut<SimulatorInputs>,
    mut simulate: MessageWriter<SimulateImpact>,
) {
    for UseCatalogEntry(entry) in selections.read() {
        let Some(input) = entry.impact_input() else {
            warn!("{} lacks a usable diameter or velocity", entry.name);
            continue;
        };
        info!(
            "Simulating {} ({:.1} m at {:.2} km/s)",
            entry.name, input.diameter_m, input.velocity_km_s
        );
        inputs.load_from_catalog(&entry.name, input.diameter_m, input.velocity_km_s);
        simulate.write(SimulateImpact);
    }
}

/// Plugin providing catalog fetching.
///
/// Reads `CatalogSettings` from the environment unless one was inserted first.
/// Expects `ImpactPlugin` for the simulator resources.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<CatalogSettings>() {
            let settings = CatalogSettings::from_env();
            if let Some(reason) = settings.unavailable_reason() {
                warn!("Catalog browsing disabled: {reason}");
            }
            app.insert_resource(settings);
        }

        app.add_message::<FetchCatalog>()
            .add_message::<LookupNeo>()
            .add_message::<UseCatalogEntry>()
            .init_resource::<CatalogState>()
            .init_resource::<CatalogTask>()
            .add_systems(
                Update,
                (
                    start_catalog_requests,
                    poll_catalog_task,
                    apply_catalog_selection.before(run_simulation),
                ),
            );
    }
}
