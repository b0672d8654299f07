//! Authenticated identity threaded explicitly into each handler.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::domain::operator::Operator;

/// Operator identity attached to the session after a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedOperator {
    pub id: i32,
    pub username: String,
}

impl From<&Operator> for AuthenticatedOperator {
    fn from(operator: &Operator) -> Self {
        Self {
            id: operator.id,
            username: operator.username.clone(),
        }
    }
}

/// Rejection that sends unauthenticated requests back to the login page.
#[derive(Debug, ThisError)]
#[error("authentication required")]
pub struct AuthRedirect;

impl ResponseError for AuthRedirect {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish()
    }
}

impl FromRequest for AuthenticatedOperator {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let operator = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|stored| serde_json::from_str(&stored).ok());

        ready(operator.ok_or_else(|| AuthRedirect.into()))
    }
}
