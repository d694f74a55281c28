//! Check Health use case
//!
//! Pings the backend API (or its database probe) and reports the result.

use crate::ports::api_gateway::{ApiGateway, GatewayError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a health check
#[derive(Error, Debug)]
pub enum CheckHealthError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Which endpoint to probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTarget {
    #[default]
    Api,
    Database,
}

impl HealthTarget {
    pub fn path(&self) -> &'static str {
        match self {
            HealthTarget::Api => "/health",
            HealthTarget::Database => "/health/db",
        }
    }
}

/// Outcome of a successful round trip
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub target: HealthTarget,
    pub url: String,
    pub ok: bool,
    pub latency_ms: u64,
    pub checked_at: DateTime<Utc>,
}

/// Use case for probing the backend
pub struct CheckHealthUseCase<G: ApiGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ApiGateway + 'static> CheckHealthUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, target: HealthTarget) -> Result<HealthReport, CheckHealthError> {
        let url = format!("{}{}", self.gateway.base_url(), target.path());
        info!("Checking health at {}", url);

        let start = Instant::now();
        let result = match target {
            HealthTarget::Api => self.gateway.health().await,
            HealthTarget::Database => self.gateway.db_health().await,
        };
        let latency_ms = start.elapsed().as_millis() as u64;

        let status = result.inspect_err(|e| warn!("Health check failed: {}", e))?;

        Ok(HealthReport {
            target,
            url,
            ok: status.ok,
            latency_ms,
            checked_at: Utc::now(),
        })
    }
}
