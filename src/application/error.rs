use thiserror::Error;

use crate::{
    config::LoadError,
    domain::routes::RouteError,
    infra::{client::ApiError, error::InfraError},
    presentation::views::TemplateRenderError,
};

/// Failures that abort a run. Page-level request failures never end up here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
