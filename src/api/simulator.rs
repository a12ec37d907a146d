use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::call::ApiCall;
use super::envelope::Envelope;
use super::handlers;
use super::route::{self, Route};
use crate::error::ApiError;
use crate::fixtures::Fixtures;
use crate::store::{MemoryStore, Store};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// What simulated writes do to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Fabricate the response, leave the store untouched.
    #[default]
    Discard,
    /// Also apply the write to memory for the life of the process.
    Apply,
}

/// Answer for paths that match no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownRoutePolicy {
    #[default]
    EmptySuccess,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorSettings {
    pub latency: Duration,
    pub write_mode: WriteMode,
    pub unknown_routes: UnknownRoutePolicy,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            write_mode: WriteMode::default(),
            unknown_routes: UnknownRoutePolicy::default(),
        }
    }
}

/// Stand-in backend: resolves a call, computes the response from the
/// store, and hands it back after the configured latency.
pub struct Simulator {
    store: Arc<dyn Store>,
    settings: SimulatorSettings,
}

impl Simulator {
    pub fn new(store: Arc<dyn Store>, settings: SimulatorSettings) -> Self {
        Self { store, settings }
    }

    pub fn from_fixtures(
        fixtures: Fixtures,
        settings: SimulatorSettings,
    ) -> Result<Self, serde_json::Error> {
        let store = MemoryStore::from_fixtures(fixtures)?;
        Ok(Self::new(Arc::new(store), settings))
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    /// Every call resolves, and never before the configured latency.
    pub async fn call(&self, call: ApiCall) -> Envelope {
        let envelope = self.respond(&call).await;
        tokio::time::sleep(self.settings.latency).await;
        envelope
    }

    /// Answer a request that never became a call, after the same latency.
    pub async fn reject(&self, error: ApiError) -> Envelope {
        tokio::time::sleep(self.settings.latency).await;
        error.into()
    }

    async fn respond(&self, call: &ApiCall) -> Envelope {
        let route = route::resolve(&call.path);
        let payload = call.payload.as_ref();
        let store = self.store.as_ref();
        let write_mode = self.settings.write_mode;

        tracing::debug!("Mock API call: {} {} -> {:?}", call.verb, call.path, route);

        let result = match route {
            Route::Endpoint(endpoint) => handlers::endpoint(store, endpoint, payload).await,
            Route::Item { resource, id } => {
                handlers::item(store, resource, id, call.verb, payload, write_mode).await
            }
            Route::Collection(resource) => {
                handlers::collection(store, resource, call.verb, payload, write_mode).await
            }
            Route::Unhandled => {
                tracing::warn!("Unhandled mock API call: {} {}", call.verb, call.path);
                match self.settings.unknown_routes {
                    UnknownRoutePolicy::EmptySuccess => return Envelope::empty(),
                    UnknownRoutePolicy::NotFound => Err(ApiError::not_found("Route not found")),
                }
            }
        };

        if let Err(e) = &result {
            tracing::debug!("Mock API call {} {} failed: {}", call.verb, call.path, e);
        }

        result.into()
    }
}
