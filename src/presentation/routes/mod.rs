// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::category_service::CategoryService;
use crate::domain::services::directory_service::DirectoryService;
use crate::domain::services::review_service::ReviewService;
use crate::domain::services::tenant_resolver::TenantResolver;
use crate::presentation::handlers::{
    category_handler, company_handler, content_handler, review_handler, tenant_handler,
};
use crate::presentation::middleware::tenant_middleware::{tenant_middleware, TenantState};
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// 应用状态
///
/// 路由装配所需的服务集合，由 main 或测试装配
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub settings: Arc<Settings>,
    /// 租户解析服务
    pub resolver: Arc<TenantResolver>,
    /// 目录服务
    pub directory: Arc<DirectoryService>,
    /// 分类服务
    pub categories: Arc<CategoryService>,
    /// 评论服务
    pub reviews: Arc<ReviewService>,
}

/// 创建应用路由
///
/// 公开路由不经过租户解析；其余路由都挂载租户中间件，
/// 处理器通过提取器接收已解析的租户上下文。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let tenant_routes = Router::new()
        .route("/v1/tenant", get(tenant_handler::get_tenant))
        .route("/v1/companies", get(company_handler::list_companies))
        .route("/v1/companies/{slug}", get(company_handler::get_company))
        .route(
            "/v1/companies/{slug}/reviews",
            get(review_handler::list_reviews),
        )
        .route(
            "/v1/companies/{slug}/reviews",
            post(review_handler::submit_review),
        )
        .route("/v1/categories", get(category_handler::list_categories))
        .route(
            "/v1/categories/{slug}/count",
            get(category_handler::get_category_count),
        )
        .route(
            "/v1/companies/{slug}/content",
            put(content_handler::upsert_content),
        )
        .route(
            "/v1/companies/{slug}/content",
            delete(content_handler::delete_content),
        )
        .route("/v1/reviews/sync", post(review_handler::sync_reviews))
        .route(
            "/v1/reviews/{id}/approve",
            post(review_handler::approve_review),
        )
        .layer(axum::middleware::from_fn_with_state(
            TenantState {
                resolver: state.resolver.clone(),
            },
            tenant_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(tenant_routes)
        .layer(Extension(state.settings.clone()))
        .layer(Extension(state.directory.clone()))
        .layer(Extension(state.categories.clone()))
        .layer(Extension(state.reviews.clone()))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
