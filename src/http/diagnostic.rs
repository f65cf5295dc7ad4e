//! The diagnostic endpoint.
//!
//! Every request, whatever its method or path, gets a 200 with a JSON
//! snapshot of app metadata and the exposed part of the environment.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::schema::{AppInfo, DEFAULT_CONTAINER};
use crate::env::Environment;
use crate::http::server::AppState;

pub const MESSAGE: &str = "CD Pipeline Test Application is running!";

/// Variables echoed back when their name starts with this prefix.
pub const EXPOSED_PREFIX: &str = "APP_";

/// Variables echoed back by exact name.
pub const EXPOSED_NAMES: [&str; 3] = ["PORT", "HOST", "NODE_ENV"];

/// Body of every diagnostic response.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticResponse {
    pub message: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub app: AppInfo,
    pub endpoint: String,
    pub container: String,
    #[serde(rename = "environment-vars")]
    pub environment_vars: BTreeMap<String, String>,
}

impl DiagnosticResponse {
    /// Assemble a response from the current state of `env`.
    pub fn build(env: &dyn Environment, endpoint: impl Into<String>) -> Self {
        Self {
            message: MESSAGE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            app: AppInfo::from_env(env),
            endpoint: endpoint.into(),
            container: env
                .non_empty("CONTAINER_NAME")
                .unwrap_or_else(|| DEFAULT_CONTAINER.to_string()),
            environment_vars: exposed_vars(env),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize diagnostic response");
            "{}".to_string()
        })
    }
}

/// Whether an environment variable may appear in a response.
pub fn is_exposed_var(key: &str) -> bool {
    key.starts_with(EXPOSED_PREFIX) || EXPOSED_NAMES.contains(&key)
}

/// Snapshot of every exposed variable in `env`.
pub fn exposed_vars(env: &dyn Environment) -> BTreeMap<String, String> {
    env.vars()
        .into_iter()
        .filter(|(key, _)| is_exposed_var(key))
        .collect()
}

/// Catch-all handler for every method and path.
pub async fn diagnostic_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    let endpoint = uri.to_string();
    let body = DiagnosticResponse::build(state.env.as_ref(), endpoint.as_str());

    tracing::debug!(
        method = %method,
        endpoint = %endpoint,
        deployment_id = %body.app.deployment_id,
        "Serving diagnostic snapshot"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_json_pretty(),
    )
        .into_response()
}
