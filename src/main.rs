use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecs_deployer::{
    config::Config,
    ecs::{ServiceSummary, TaskDefinitionSummary},
    ClusterServiceDeployer, EcsClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing; stdout is reserved for the JSON result
    let json_layer = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();

    let client = EcsClient::new(config.region.clone(), config.endpoint_url.clone()).await;
    let deployer = ClusterServiceDeployer::new(config.cluster, config.service, client);

    tracing::info!(
        cluster = %deployer.cluster(),
        service = %deployer.service(),
        "Starting ECS deployer"
    );

    let output = match config.task_definition {
        Some(task_definition) => {
            let service = deployer.update_service(&task_definition).await?;
            serde_json::to_string_pretty(&ServiceSummary::from(&service))?
        }
        None => {
            let task_definition = deployer.get_service_task_definition().await?;
            serde_json::to_string_pretty(&TaskDefinitionSummary::from(&task_definition))?
        }
    };

    println!("{output}");
    Ok(())
}
