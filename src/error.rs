use thiserror::Error;

use crate::catalog::error::SourceError;
use crate::infra::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to start UI: {0}")]
    Ui(#[from] eframe::Error),
}
