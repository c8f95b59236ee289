// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use std::sync::Arc;

use crate::application::dto::company_query::CompanyListQueryDto;
use crate::application::dto::company_response::{CompanyListResponseDto, CompanyViewDto};
use crate::config::settings::Settings;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::domain::services::directory_service::DirectoryService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::tenant::CurrentTenant;

/// 列出当前租户可见的企业
///
/// # 参数
///
/// * `query` - 原始查询参数；格式错误返回400，绝不静默修正
///
/// # 返回值
///
/// 返回分页的企业视图列表（已合并租户内容覆盖）
pub async fn list_companies(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(query): Query<CompanyListQueryDto>,
) -> Result<Json<CompanyListResponseDto>, AppError> {
    let filter = query.into_filter(&settings.pagination)?;
    let page = directory.list_companies(&tenant, filter).await?;
    Ok(Json(CompanyListResponseDto::from(page)))
}

/// 按slug获取企业详情
///
/// slug不存在与仅在其他租户可见返回相同的404，刻意不可区分。
pub async fn get_company(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<CompanyViewDto>, AppError> {
    let view = directory
        .get_company(&tenant, &slug)
        .await?
        .ok_or(RepositoryError::NotFound)?;
    Ok(Json(CompanyViewDto::from(view)))
}
