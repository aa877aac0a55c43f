//! ECS API client wrapper

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecs::operation::describe_services::DescribeServicesOutput;
use aws_sdk_ecs::operation::describe_task_definition::DescribeTaskDefinitionOutput;
use aws_sdk_ecs::operation::update_service::UpdateServiceOutput;
use aws_sdk_ecs::Client;
use tracing::{info, instrument};

use crate::error::ApiError;

/// The subset of the ECS control plane the deployer talks to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EcsApi: Send + Sync {
    /// Describe a single service within a cluster
    async fn describe_services(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<DescribeServicesOutput, ApiError>;

    /// Describe a task definition by ARN or `family:revision`
    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> Result<DescribeTaskDefinitionOutput, ApiError>;

    /// Point a service at a task definition
    async fn update_service(
        &self,
        cluster: &str,
        service: &str,
        task_definition: &str,
    ) -> Result<UpdateServiceOutput, ApiError>;
}

/// Wrapper around aws_sdk_ecs::Client
#[derive(Clone)]
pub struct EcsClient {
    client: Client,
}

impl EcsClient {
    /// Create a new EcsClient from the default AWS credential and region chain
    #[instrument(skip_all)]
    pub async fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint_url) = endpoint_url {
            info!(%endpoint_url, "Using custom ECS endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        info!(region = ?config.region(), "ECS client configured");

        Self::from_client(Client::new(&config))
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EcsApi for EcsClient {
    #[instrument(skip(self))]
    async fn describe_services(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<DescribeServicesOutput, ApiError> {
        let output = self
            .client
            .describe_services()
            .cluster(cluster)
            .services(service)
            .send()
            .await?;
        Ok(output)
    }

    #[instrument(skip(self))]
    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> Result<DescribeTaskDefinitionOutput, ApiError> {
        let output = self
            .client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await?;
        Ok(output)
    }

    #[instrument(skip(self))]
    async fn update_service(
        &self,
        cluster: &str,
        service: &str,
        task_definition: &str,
    ) -> Result<UpdateServiceOutput, ApiError> {
        let output = self
            .client
            .update_service()
            .cluster(cluster)
            .service(service)
            .task_definition(task_definition)
            .send()
            .await?;
        Ok(output)
    }
}
