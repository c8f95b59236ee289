// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::category::Category;
use crate::domain::models::tenant::Tenant;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use std::sync::Arc;
use tracing::debug;

/// 将分类slug展开为自身及其子分类的slug集合
///
/// 主分类展开为 [自身, 子分类...] 的并集；子分类或未知slug保持原样。
/// 两级树按约定维护，不做递归遍历。
pub async fn expand_category_slugs(
    repo: &dyn CategoryRepository,
    slug: &str,
) -> Result<Vec<String>, RepositoryError> {
    let mut slugs = vec![slug.to_string()];

    if let Some(category) = repo.find_by_slug(slug).await? {
        if category.is_main() {
            for child in repo.list_children(category.id).await? {
                slugs.push(child.slug);
            }
        }
    }

    Ok(slugs)
}

/// 分类服务
///
/// 两级分类树的读取与租户范围内的企业计数。计数始终委托可见性
/// 门控的谓词；跨租户的全局计数是单独命名的操作，避免聚合数字
/// 意外泄露跨租户信息。
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl CategoryService {
    /// 创建新的分类服务实例
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            categories,
            companies,
        }
    }

    /// 列出所有主分类
    pub async fn list_main_categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.list_main().await?)
    }

    /// 统计某分类在租户范围内可见的企业数
    ///
    /// 主分类的计数包含其全部子分类下的企业（并集），
    /// 避免只在叶子层打标时漏计。
    pub async fn count_companies_in_category(
        &self,
        slug: &str,
        tenant: &Tenant,
    ) -> Result<u64, DomainError> {
        let slugs = expand_category_slugs(self.categories.as_ref(), slug).await?;
        let count = self
            .companies
            .count_visible_in_categories(tenant.id, &slugs)
            .await?;
        debug!(tenant = %tenant.hostname, category = %slug, count, "category count computed");
        Ok(count)
    }

    /// 统计某分类下全平台的激活企业数（跨租户，管理用途）
    pub async fn count_companies_in_category_global(
        &self,
        slug: &str,
    ) -> Result<u64, DomainError> {
        let slugs = expand_category_slugs(self.categories.as_ref(), slug).await?;
        Ok(self.companies.count_in_categories_global(&slugs).await?)
    }
}

#[cfg(test)]
#[path = "category_service_test.rs"]
mod tests;
