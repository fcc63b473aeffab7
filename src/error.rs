use actix_web::{http::StatusCode, ResponseError};
use anyhow::Error as ANYHOW_ERROR;
use serde_json::Error as JSON_ERROR;
use sqlx::error::Error as SQL_ERROR;
use std::num::{ParseFloatError, ParseIntError};
use std::{
    env::VarError, io::Error as IO_ERROR,
    str::ParseBoolError as PARSE_BOOL_ERROR,
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;
use url::ParseError as URL_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    URL(#[from] URL_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    FLOAT(#[from] ParseFloatError),

    #[error("{0}")]
    SQL(#[from] SQL_ERROR),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("{0}")]
    ParseBoolError(#[from] PARSE_BOOL_ERROR),

    #[error("{0}")]
    JsonError(#[from] JSON_ERROR),

    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Server end with error: {0}")]
    ServerError(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    AnyHowError(#[from] ANYHOW_ERROR),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::SQL(SQL_ERROR::Database(e))
                if e.is_unique_violation()
                    || e.is_foreign_key_violation() =>
            {
                StatusCode::CONFLICT
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
