//! Deployer for a single ECS service
//!
//! Reads which task definition a service runs and points the service at a new
//! one. Rollout pacing and health gating are left to ECS.

use aws_sdk_ecs::types::{Service, TaskDefinition};
use tracing::{error, info, instrument, warn};

use super::client::{EcsApi, EcsClient};
use crate::error::{DeployError, DeployResult};

/// Deploys task definitions to one service in one cluster
pub struct ClusterServiceDeployer<C = EcsClient> {
    cluster: String,
    service: String,
    client: C,
}

impl<C: EcsApi> ClusterServiceDeployer<C> {
    /// Create a new deployer for `service` in `cluster`
    pub fn new(cluster: impl Into<String>, service: impl Into<String>, client: C) -> Self {
        Self {
            cluster: cluster.into(),
            service: service.into(),
            client,
        }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Fetch the full task definition the service is currently configured to run
    #[instrument(skip(self), fields(cluster = %self.cluster, service = %self.service))]
    pub async fn get_service_task_definition(&self) -> DeployResult<TaskDefinition> {
        let output = self
            .client
            .describe_services(&self.cluster, &self.service)
            .await
            .map_err(|source| {
                error!(error = %source, "Service lookup failed");
                DeployError::Lookup {
                    cluster: self.cluster.clone(),
                    service: self.service.clone(),
                    source,
                }
            })?;

        let reason = output
            .failures()
            .first()
            .and_then(|failure| failure.reason())
            .map(str::to_string);

        let Some(service) = output.services.unwrap_or_default().into_iter().next() else {
            warn!(reason = reason.as_deref().unwrap_or("none"), "No matching service");
            return Err(DeployError::NotFound {
                cluster: self.cluster.clone(),
                service: self.service.clone(),
                reason,
            });
        };

        if service.status() != Some("ACTIVE") {
            warn!(
                status = service.status().unwrap_or("unknown"),
                "Service is not active, its task definition may be stale"
            );
        }

        let task_definition = service
            .task_definition
            .ok_or_else(|| DeployError::incomplete("DescribeServices", "service task definition"))?;

        let output = self
            .client
            .describe_task_definition(&task_definition)
            .await
            .map_err(|source| {
                error!(%task_definition, error = %source, "Task definition lookup failed");
                DeployError::Resolution {
                    task_definition: task_definition.clone(),
                    source,
                }
            })?;

        let resolved = output
            .task_definition
            .ok_or_else(|| DeployError::incomplete("DescribeTaskDefinition", "task definition"))?;

        info!(%task_definition, "Resolved service task definition");
        Ok(resolved)
    }

    /// Ask ECS to roll the service onto `task_definition`
    ///
    /// Returns as soon as ECS accepts the request; the rollout itself is not
    /// awaited.
    #[instrument(skip(self), fields(cluster = %self.cluster, service = %self.service))]
    pub async fn update_service(&self, task_definition: &str) -> DeployResult<Service> {
        let output = self
            .client
            .update_service(&self.cluster, &self.service, task_definition)
            .await
            .map_err(|source| {
                error!(error = %source, "Service update failed");
                DeployError::Update {
                    cluster: self.cluster.clone(),
                    service: self.service.clone(),
                    task_definition: task_definition.to_string(),
                    source,
                }
            })?;

        let service = output
            .service
            .ok_or_else(|| DeployError::incomplete("UpdateService", "service"))?;

        info!("Service update accepted");
        Ok(service)
    }
}
