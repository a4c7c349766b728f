
use std::sync::Arc;

use crate::{model, web};
use axum::{
    response::{IntoResponse, Response},
    http::StatusCode
};
use serde::Serialize;
use tracing::debug;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag ="type", content="data")]
pub enum Error {
    InvalidBody(String),

    Model(model::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!("{:<12} - web::Error {self:?}", "INTO_RES");
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(Arc::new(self));
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use web::Error::*;

        match self {
            Model(model::Error::MissingField { field }) => {
                (StatusCode::BAD_REQUEST, ClientError::MISSING_FIELD { field: *field })
            },
            InvalidBody(..) => (StatusCode::BAD_REQUEST, ClientError::INVALID_BODY),
            Model(model::Error::EntityNotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, ClientError::ENTITY_NOT_FOUND { entity: *entity })
            },
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            )
        }
    }
}

#[derive(Debug, Clone, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    MISSING_FIELD { field: &'static str },
    INVALID_BODY,
    ENTITY_NOT_FOUND { entity: &'static str },
    SERVICE_ERROR
}

impl ClientError {
    pub fn message(&self) -> String {
        match self {
            Self::MISSING_FIELD { field } => format!("Title and URL are required, {field} is missing."),
            Self::INVALID_BODY => "Request body must be a JSON object.".to_string(),
            Self::ENTITY_NOT_FOUND { entity } => format!("No {entity} with that id."),
            Self::SERVICE_ERROR => "Internal server error.".to_string(),
        }
    }
}
