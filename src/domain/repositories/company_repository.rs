// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::tenant_repository::RepositoryError;
use crate::domain::models::company::{Company, CompanyFilter};
use crate::domain::models::company_content::CompanyContent;
use crate::domain::models::Page;
use async_trait::async_trait;
use uuid::Uuid;

/// 企业仓库特质
///
/// 可见性门控的查询侧：所有租户范围的读取都从 company_contents
/// 连接表出发（tenant_id 匹配且 is_visible 为真，且企业自身激活），
/// 隔离是结构性的，不做事后过滤。企业绝不会仅因为在租户B上架
/// 就出现在租户A的结果集中。
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// 列出某租户可见的企业及其上架记录
    ///
    /// # 参数
    ///
    /// * `tenant_id` - 租户ID
    /// * `filter` - 已校验的查询过滤器
    ///
    /// # 返回值
    ///
    /// * `Ok(Page)` - 分页结果，每项为(企业, 上架记录)对
    /// * `Err(RepositoryError)` - 查询失败
    async fn list_visible(
        &self,
        tenant_id: Uuid,
        filter: &CompanyFilter,
    ) -> Result<Page<(Company, CompanyContent)>, RepositoryError>;

    /// 按slug查找某租户可见的企业
    ///
    /// slug不存在与slug只在其他租户可见返回同样的 `Ok(None)`，
    /// 避免跨租户存在性信息泄露。
    async fn find_visible_by_slug(
        &self,
        tenant_id: Uuid,
        slug: &str,
    ) -> Result<Option<(Company, CompanyContent)>, RepositoryError>;

    /// 按slug查找企业（不限定租户，管理路径使用）
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>, RepositoryError>;

    /// 统计某租户可见、且挂在给定分类slug集合下的企业数
    async fn count_visible_in_categories(
        &self,
        tenant_id: Uuid,
        category_slugs: &[String],
    ) -> Result<u64, RepositoryError>;

    /// 统计全平台挂在给定分类slug集合下的激活企业数（跨租户聚合，独立命名）
    async fn count_in_categories_global(
        &self,
        category_slugs: &[String],
    ) -> Result<u64, RepositoryError>;

    /// 单行更新企业的反规范化评分聚合
    ///
    /// # 参数
    ///
    /// * `company_id` - 企业ID
    /// * `rating` - 平均评分；无合格评论时为 None
    /// * `review_count` - 合格评论数
    async fn update_rating(
        &self,
        company_id: Uuid,
        rating: Option<f64>,
        review_count: i32,
    ) -> Result<(), RepositoryError>;
}
