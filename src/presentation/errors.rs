// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::DomainError;
use crate::domain::repositories::tenant_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = if let Some(domain_err) = self.0.downcast_ref::<DomainError>() {
            match domain_err {
                DomainError::InvalidFilter(_) | DomainError::RatingOutOfRange(_) => {
                    StatusCode::BAD_REQUEST
                }
                DomainError::TenantNotResolved(_) => StatusCode::INTERNAL_SERVER_ERROR,
                DomainError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                DomainError::Repository(RepositoryError::Duplicate(_)) => StatusCode::CONFLICT,
                DomainError::Repository(RepositoryError::Database(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else if let Some(repo_err) = self.0.downcast_ref::<RepositoryError>() {
            match repo_err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Duplicate(_) => StatusCode::CONFLICT,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else if self.0.downcast_ref::<validator::ValidationErrors>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %error_message, "request failed");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
