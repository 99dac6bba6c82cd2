//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, TrendPoint};
use crate::config::DashboardConfig;
use crate::resource::{PollHandle, PolledResource};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Dropping the last clone stops the trends
/// poller.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    api: ApiClient,
    trends: PolledResource<Vec<TrendPoint>>,
    _trends_poller: PollHandle,
}

impl AppState {
    /// Create the application state and start polling donation trends.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn new(config: DashboardConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api)?;

        let trends = PolledResource::new();
        let poll_client = api.clone();
        let trends_poller = trends.spawn(config.trends_poll_interval, move || {
            let client = poll_client.clone();
            async move { client.trends().await }
        });

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                trends,
                _trends_poller: trends_poller,
            }),
        })
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get the self-refreshing donation trends.
    #[must_use]
    pub fn trends(&self) -> &PolledResource<Vec<TrendPoint>> {
        &self.inner.trends
    }
}
