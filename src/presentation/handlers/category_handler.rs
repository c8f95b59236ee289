// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use futures::future::try_join_all;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::dto::category_response::{CategoryCountDto, CategoryDto};
use crate::domain::services::category_service::CategoryService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::tenant::CurrentTenant;

/// 分类计数查询参数
#[derive(Debug, Deserialize, Default)]
pub struct CategoryCountQueryDto {
    /// 为true时返回跨租户的全局计数（运营用途）
    pub global: Option<bool>,
}

/// 列出主分类及其在当前租户下的企业计数
///
/// 每个主分类的计数包含其子分类的并集，按企业去重；
/// 各分类的计数并发执行。
pub async fn list_categories(
    CurrentTenant(tenant): CurrentTenant,
    Extension(categories): Extension<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryDto>>, AppError> {
    let main = categories.list_main_categories().await?;

    let counts = try_join_all(
        main.iter()
            .map(|category| categories.count_companies_in_category(&category.slug, &tenant)),
    )
    .await?;

    Ok(Json(
        main.into_iter()
            .zip(counts)
            .map(|(category, count)| CategoryDto::from_category(category, count))
            .collect(),
    ))
}

/// 获取某分类的企业计数
///
/// 默认返回当前租户范围内的可见企业数；`global=true` 时返回
/// 全平台激活企业数（跨租户，运营用途）。
pub async fn get_category_count(
    CurrentTenant(tenant): CurrentTenant,
    Extension(categories): Extension<Arc<CategoryService>>,
    Path(slug): Path<String>,
    Query(query): Query<CategoryCountQueryDto>,
) -> Result<Json<CategoryCountDto>, AppError> {
    let company_count = if query.global.unwrap_or(false) {
        categories.count_companies_in_category_global(&slug).await?
    } else {
        categories
            .count_companies_in_category(&slug, &tenant)
            .await?
    };

    Ok(Json(CategoryCountDto {
        slug,
        company_count,
    }))
}
