//! ECS Deployer Library
//!
//! Looks up and updates the task definition an ECS service runs.

pub mod config;
pub mod ecs;
pub mod error;

pub use ecs::{ClusterServiceDeployer, EcsApi, EcsClient};
pub use error::{ApiError, DeployError, DeployResult};
