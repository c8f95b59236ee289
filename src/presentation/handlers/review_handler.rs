// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::review_request::{ReviewSubmissionDto, ReviewSyncRequestDto};
use crate::application::dto::review_response::{RatingSummaryDto, ReviewDto, SyncOutcomeDto};
use crate::domain::errors::DomainError;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::domain::services::directory_service::DirectoryService;
use crate::domain::services::review_service::ReviewService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::tenant::CurrentTenant;

/// 列出某企业的公开评论
///
/// 先经过租户可见性门控——企业在当前租户不可见时返回404，
/// 与slug不存在不可区分。
pub async fn list_reviews(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Extension(reviews): Extension<Arc<ReviewService>>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<ReviewDto>>, AppError> {
    let view = directory
        .get_company(&tenant, &slug)
        .await?
        .ok_or(RepositoryError::NotFound)?;

    let items = reviews.list_public(view.company.id).await?;
    Ok(Json(items.into_iter().map(ReviewDto::from).collect()))
}

/// 提交手工评论
///
/// 创建待审核的评论，不影响评分聚合；审核通过后才计入。
pub async fn submit_review(
    CurrentTenant(tenant): CurrentTenant,
    Extension(directory): Extension<Arc<DirectoryService>>,
    Extension(reviews): Extension<Arc<ReviewService>>,
    Path(slug): Path<String>,
    Json(payload): Json<ReviewSubmissionDto>,
) -> Result<(StatusCode, Json<ReviewDto>), AppError> {
    payload.validate()?;

    let view = directory
        .get_company(&tenant, &slug)
        .await?
        .ok_or(RepositoryError::NotFound)?;

    let review = reviews
        .submit_manual(view.company.id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}

/// 批量同步外部评论
///
/// 运营接口：企业按slug全局查找，批次按幂等键上插后重算评分聚合。
pub async fn sync_reviews(
    Extension(reviews): Extension<Arc<ReviewService>>,
    Json(payload): Json<ReviewSyncRequestDto>,
) -> Result<Json<SyncOutcomeDto>, AppError> {
    payload.validate()?;

    let source = payload
        .source
        .parse()
        .map_err(|_| DomainError::InvalidFilter(format!("unknown review source '{}'", payload.source)))?;

    let outcome = reviews
        .sync_external_by_slug(
            &payload.company_slug,
            source,
            payload.reviews.into_iter().map(Into::into).collect(),
        )
        .await?;
    Ok(Json(SyncOutcomeDto::from(outcome)))
}

/// 审核通过一条评论并重算评分聚合
pub async fn approve_review(
    Extension(reviews): Extension<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RatingSummaryDto>, AppError> {
    let summary = reviews.approve(id).await?;
    Ok(Json(RatingSummaryDto::from(summary)))
}
