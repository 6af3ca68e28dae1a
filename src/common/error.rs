use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid sampler parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Scene sink failed for {identifier}: {reason}")]
    Sink { identifier: String, reason: String },

    #[error("Parse error: {reason}")]
    Parse { reason: String },

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
