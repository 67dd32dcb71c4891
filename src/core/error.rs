use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("element id for {0} must not be empty")]
    EmptyElementId(&'static str),

    #[error("invalid marker class must not be empty")]
    EmptyInvalidClass,

    #[error("required message for {0} must not be empty")]
    EmptyMessage(&'static str),
}
