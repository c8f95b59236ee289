// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::tenant_repository::RepositoryError;
use crate::domain::models::category::Category;
use async_trait::async_trait;
use uuid::Uuid;

/// 分类仓库特质
///
/// 分类树由平台集中管理、全租户共享，请求路径上只读。
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 列出所有主分类（parent_id 为空），按排序权重、名称排序
    async fn list_main(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 按slug查找分类
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;

    /// 列出某主分类的直接子分类
    async fn list_children(&self, parent_id: Uuid) -> Result<Vec<Category>, RepositoryError>;
}
