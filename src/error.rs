//! Error types for ECS deployments

use thiserror::Error;

/// Error returned by the ECS API binding, passed through untouched
pub type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for deployer operations
pub type DeployResult<T> = Result<T, DeployError>;

#[derive(Debug, Error)]
pub enum DeployError {
    /// The DescribeServices call failed
    #[error("failed to describe service '{service}' in cluster '{cluster}'")]
    Lookup {
        cluster: String,
        service: String,
        #[source]
        source: ApiError,
    },

    /// DescribeServices succeeded but matched nothing
    #[error("service '{service}' not found in cluster '{cluster}'{}", format_reason(.reason))]
    NotFound {
        cluster: String,
        service: String,
        reason: Option<String>,
    },

    /// The DescribeTaskDefinition call failed
    #[error("failed to describe task definition '{task_definition}'")]
    Resolution {
        task_definition: String,
        #[source]
        source: ApiError,
    },

    /// The UpdateService call failed
    #[error("failed to update service '{service}' in cluster '{cluster}' to task definition '{task_definition}'")]
    Update {
        cluster: String,
        service: String,
        task_definition: String,
        #[source]
        source: ApiError,
    },

    #[error("{operation} response is missing {field}")]
    IncompleteResponse {
        operation: &'static str,
        field: &'static str,
    },
}

impl DeployError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeployError::NotFound { .. })
    }

    pub(crate) fn incomplete(operation: &'static str, field: &'static str) -> Self {
        DeployError::IncompleteResponse { operation, field }
    }
}

fn format_reason(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default()
}
