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

use crate::domain::services::tenant_resolver::TenantResolver;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, error};

/// 租户解析状态
#[derive(Clone)]
pub struct TenantState {
    /// 租户解析服务
    pub resolver: Arc<TenantResolver>,
}

/// 租户解析中间件
///
/// 从Host头解析租户并注入请求扩展，下游处理器以显式参数接收租户
/// 上下文。每个请求只解析一次。
///
/// # 参数
///
/// * `state` - 租户解析状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 解析成功的响应
/// * `Err(StatusCode)` - 默认租户缺失时的状态码
pub async fn tenant_middleware(
    State(state): State<TenantState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    debug!("TenantMiddleware resolving host: {}", host);

    match state.resolver.resolve(&host).await {
        Ok(tenant) => {
            req.extensions_mut().insert(tenant);
            Ok(next.run(req).await)
        }
        Err(e) => {
            // Only reachable when the configured default tenant is missing,
            // a deployment error rather than a client one.
            error!("Tenant resolution failed for host '{}': {}", host, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
