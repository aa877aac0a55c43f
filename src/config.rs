use anyhow::{bail, Context, Result};
use serde::Deserialize;

const ENV_PREFIX: &str = "ECS_DEPLOY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub cluster: String,

    pub service: String,

    /// Task definition to roll the service onto; when unset only the current one is reported
    #[serde(default)]
    pub task_definition: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub endpoint_url: Option<String>,

    #[serde(default = "default_log_json")]
    pub log_json: bool,
}

fn default_log_json() -> bool {
    false
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder().add_source(env).build()?;

        let settings: Config = config
            .try_deserialize()
            .with_context(|| format!("invalid {ENV_PREFIX}_* configuration"))?;

        settings.validate()
    }

    fn validate(mut self) -> Result<Self> {
        if self.cluster.trim().is_empty() {
            bail!("{ENV_PREFIX}_CLUSTER must not be empty");
        }
        if self.service.trim().is_empty() {
            bail!("{ENV_PREFIX}_SERVICE must not be empty");
        }
        self.task_definition = self.task_definition.filter(|td| !td.trim().is_empty());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_env(env(&[
            ("ECS_DEPLOY_CLUSTER", "mycluster"),
            ("ECS_DEPLOY_SERVICE", "myservice"),
        ]))
        .unwrap();

        assert_eq!(config.cluster, "mycluster");
        assert_eq!(config.service, "myservice");
        assert_eq!(config.task_definition, None);
        assert_eq!(config.region, None);
        assert_eq!(config.endpoint_url, None);
        assert!(!config.log_json);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_env(env(&[
            ("ECS_DEPLOY_CLUSTER", "mycluster"),
            ("ECS_DEPLOY_SERVICE", "myservice"),
            ("ECS_DEPLOY_TASK_DEFINITION", "web:42"),
            ("ECS_DEPLOY_REGION", "eu-west-1"),
            ("ECS_DEPLOY_ENDPOINT_URL", "http://localhost:4566"),
            ("ECS_DEPLOY_LOG_JSON", "true"),
        ]))
        .unwrap();

        assert_eq!(config.task_definition.as_deref(), Some("web:42"));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert!(config.log_json);
    }

    #[test]
    fn test_missing_service_is_rejected() {
        let result = Config::from_env(env(&[("ECS_DEPLOY_CLUSTER", "mycluster")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_value_names_the_offending_key() {
        let err = Config::from_env(env(&[
            ("ECS_DEPLOY_CLUSTER", "mycluster"),
            ("ECS_DEPLOY_SERVICE", "myservice"),
            ("ECS_DEPLOY_LOG_JSON", "maybe"),
        ]))
        .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.starts_with("invalid ECS_DEPLOY_* configuration"), "{message}");
        assert!(message.contains("log_json"), "{message}");
        assert!(!message.contains("must be set"), "{message}");
    }

    #[test]
    fn test_blank_cluster_is_rejected() {
        let result = Config::from_env(env(&[
            ("ECS_DEPLOY_CLUSTER", "  "),
            ("ECS_DEPLOY_SERVICE", "myservice"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_task_definition_is_unset() {
        let config = Config::from_env(env(&[
            ("ECS_DEPLOY_CLUSTER", "mycluster"),
            ("ECS_DEPLOY_SERVICE", "myservice"),
            ("ECS_DEPLOY_TASK_DEFINITION", ""),
        ]))
        .unwrap();
        assert_eq!(config.task_definition, None);
    }
}
