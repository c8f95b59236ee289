// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::content_request::ContentUpsertDto;
use crate::domain::services::directory_service::{DirectoryService, ListingDraft};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::tenant::CurrentTenant;

/// 插入或更新企业在当前租户的上架记录
///
/// 运营接口：企业按slug全局查找，不存在返回404。
/// 整条记录被覆盖，字段缺省表示清除对应覆盖。
pub async fn upsert_content(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Path(slug): Path<String>,
    Json(payload): Json<ContentUpsertDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload.validate()?;

    let draft = ListingDraft {
        is_visible: payload.is_visible,
        description: payload.description,
        promotions: payload.promotions,
        images: payload.images,
        custom_fields: payload.custom_fields.unwrap_or_else(|| json!({})),
    };

    let stored = directory.upsert_listing(&tenant, &slug, draft).await?;
    Ok(Json(json!({
        "company_slug": slug,
        "tenant": tenant.hostname,
        "is_visible": stored.is_visible,
    })))
}

/// 删除企业在当前租户的上架记录
///
/// 记录不存在返回404；删除后企业对该租户不可见，覆盖内容一并丢弃。
pub async fn delete_content(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    directory.remove_listing(&tenant, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
