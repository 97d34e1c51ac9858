use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
