use std::io;

use thiserror::Error;

use estay_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use crate::TransactionError;

pub use estay_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> AppError {
        match err {
            TransactionError::Usecase(err) => err.into(),
            err => AppError::Business(BError::Internal(err.to_string())),
        }
    }
}
