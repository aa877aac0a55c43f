//! Reportable summaries of ECS services and task definitions
//!
//! The SDK types carry no serde support, so the driver prints these instead.

use aws_sdk_ecs::types::{ContainerDefinition, Service, TaskDefinition};
use serde::{Deserialize, Serialize};

/// Reportable view of an ECS service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceSummary {
    pub service_name: Option<String>,
    pub service_arn: Option<String>,
    pub cluster_arn: Option<String>,
    pub status: Option<String>,
    pub task_definition: Option<String>,
    pub desired_count: i32,
    pub running_count: i32,
    pub pending_count: i32,
}

/// Reportable view of a task definition revision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDefinitionSummary {
    pub task_definition_arn: Option<String>,
    pub family: Option<String>,
    pub revision: i32,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    pub containers: Vec<ContainerSummary>,
}

/// Name and image of one container in a task definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerSummary {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<&Service> for ServiceSummary {
    fn from(service: &Service) -> Self {
        Self {
            service_name: service.service_name().map(str::to_string),
            service_arn: service.service_arn().map(str::to_string),
            cluster_arn: service.cluster_arn().map(str::to_string),
            status: service.status().map(str::to_string),
            task_definition: service.task_definition().map(str::to_string),
            desired_count: service.desired_count(),
            running_count: service.running_count(),
            pending_count: service.pending_count(),
        }
    }
}

impl From<&TaskDefinition> for TaskDefinitionSummary {
    fn from(task_definition: &TaskDefinition) -> Self {
        Self {
            task_definition_arn: task_definition.task_definition_arn().map(str::to_string),
            family: task_definition.family().map(str::to_string),
            revision: task_definition.revision(),
            status: task_definition.status().map(|s| s.as_str().to_string()),
            cpu: task_definition.cpu().map(str::to_string),
            memory: task_definition.memory().map(str::to_string),
            containers: task_definition
                .container_definitions()
                .iter()
                .map(ContainerSummary::from)
                .collect(),
        }
    }
}

impl From<&ContainerDefinition> for ContainerSummary {
    fn from(container: &ContainerDefinition) -> Self {
        Self {
            name: container.name().map(str::to_string),
            image: container.image().map(str::to_string),
        }
    }
}
