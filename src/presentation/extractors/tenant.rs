// Copyright 2025 Annuaire
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::models::tenant::Tenant;

/// 当前租户提取器
///
/// 从请求扩展中取出租户中间件注入的租户上下文。
/// 只能用于挂载了租户中间件的路由。
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub Tenant);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Tenant>() {
            Some(tenant) => Ok(CurrentTenant(tenant.clone())),
            None => {
                let status = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                let body = Json(json!({ "error": "Tenant context missing from request" }));
                Err((status, body).into_response())
            }
        }
    }
}
