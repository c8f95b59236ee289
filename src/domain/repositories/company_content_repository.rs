// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::tenant_repository::RepositoryError;
use crate::domain::models::company_content::CompanyContent;
use async_trait::async_trait;
use uuid::Uuid;

/// 企业内容仓库特质
///
/// 上架记录的写入侧。(company_id, tenant_id) 唯一约束保证
/// 每个企业在每个租户上至多一条记录。
#[async_trait]
pub trait CompanyContentRepository: Send + Sync {
    /// 查找某企业在某租户上的上架记录
    async fn find(
        &self,
        company_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<CompanyContent>, RepositoryError>;

    /// 插入或更新上架记录
    ///
    /// 已存在 (company_id, tenant_id) 对时更新可见性与覆盖字段，
    /// 否则插入新记录。
    ///
    /// # 返回值
    ///
    /// * `Ok(CompanyContent)` - 落库后的记录
    /// * `Err(RepositoryError)` - 操作失败
    async fn upsert(&self, content: &CompanyContent) -> Result<CompanyContent, RepositoryError>;

    /// 删除上架记录（企业从该租户目录完全下架）
    async fn delete(&self, company_id: Uuid, tenant_id: Uuid) -> Result<(), RepositoryError>;
}
