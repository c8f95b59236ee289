// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::tenant_repository::RepositoryError;
use thiserror::Error;

/// 领域错误类型
///
/// 封装领域服务可能返回的所有错误。过滤器错误会被表示层
/// 映射为 400，仓库未找到错误映射为 404，其余映射为 500。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 调用方提供的过滤器格式错误（不裁剪、不静默修正）
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    /// 评分超出 [1,5] 范围
    #[error("rating must be an integer between 1 and 5, got {0}")]
    RatingOutOfRange(i32),
    /// 未配置默认租户，且Host头无法解析到任何租户（部署错误）
    #[error("no tenant matched and the default tenant '{0}' is not registered")]
    TenantNotResolved(String),
    /// 仓库层错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
