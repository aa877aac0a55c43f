//! ECS integration module
//!
//! This module handles all interactions with the ECS control plane:
//! - Looking up the task definition a service runs
//! - Pointing a service at a new task definition revision
//! - Summarizing services and task definitions for reporting

mod client;
mod deployer;
mod types;

pub use client::{EcsApi, EcsClient};
pub use deployer::ClusterServiceDeployer;
pub use types::{ContainerSummary, ServiceSummary, TaskDefinitionSummary};
