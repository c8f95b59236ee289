// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::tenant_repository::RepositoryError;
use crate::domain::models::review::Review;
use async_trait::async_trait;
use uuid::Uuid;

/// 评论仓库特质
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// 创建评论
    async fn create(&self, review: &Review) -> Result<Review, RepositoryError>;

    /// 根据ID查找评论
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, RepositoryError>;

    /// 列出某企业的公开评论（激活且已审核），按评论日期降序
    async fn list_public_by_company(&self, company_id: Uuid)
        -> Result<Vec<Review>, RepositoryError>;

    /// 标记评论审核通过
    async fn mark_approved(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 按幂等同步键插入或更新外部评论
    ///
    /// 键为 (company_id, source, external_review_id)；重复投递只更新
    /// 可变字段（评分、内容、作者、评论日期），不产生重复行。
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 插入了新行
    /// * `Ok(false)` - 更新了已有行
    /// * `Err(RepositoryError)` - 操作失败
    async fn upsert_external(&self, review: &Review) -> Result<bool, RepositoryError>;
}
