//! Dashboard widget fetchers.
//!
//! The three widgets load independently: one endpoint failing never rolls
//! back or blocks the others. Pages wire each call to its own resource.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::net::client::{ApiClient, ApiError, HttpClient};
use crate::net::types::DataEnvelope;

const DASHBOARD_FALLBACK: &str = "Dashboard request failed";

/// Headline numbers for the stats row.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub active_users: u64,
}

/// A row in the recent-orders widget.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: String,
}

/// A row in the work-orders widget.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Client for the `/api/dashboard` endpoints.
#[derive(Clone)]
pub struct DashboardApi<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> DashboardApi<C> {
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Typed error on transport failure, non-2xx status, or a malformed
    /// body.
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.fetch("/api/dashboard/stats").await
    }

    /// # Errors
    ///
    /// Same contract as [`stats`](DashboardApi::stats).
    pub async fn recent_orders(&self) -> Result<Vec<RecentOrder>, ApiError> {
        self.fetch("/api/dashboard/recent-orders").await
    }

    /// # Errors
    ///
    /// Same contract as [`stats`](DashboardApi::stats).
    pub async fn work_orders(&self) -> Result<Vec<WorkOrder>, ApiError> {
        self.fetch("/api/dashboard/work-orders").await
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.api.get(endpoint).await?;
        if !response.ok() {
            return Err(response.into_error(DASHBOARD_FALLBACK));
        }
        if let Ok(DataEnvelope { data: Some(inner) }) =
            serde_json::from_str::<DataEnvelope<T>>(&response.body)
        {
            return Ok(inner);
        }
        response.json()
    }
}
