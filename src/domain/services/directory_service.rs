// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::company::{CompanyFilter, CompanyView};
use crate::domain::models::company_content::CompanyContent;
use crate::domain::models::tenant::Tenant;
use crate::domain::models::Page;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::repositories::company_content_repository::CompanyContentRepository;
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::domain::services::category_service::expand_category_slugs;
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 上架草稿
///
/// 运营方/企业主对某租户上架记录的写入载荷。
#[derive(Debug, Clone)]
pub struct ListingDraft {
    /// 在该租户上是否可见
    pub is_visible: bool,
    /// 租户定制描述
    pub description: Option<String>,
    /// 租户促销文案
    pub promotions: Option<String>,
    /// 租户附加图片列表
    pub images: Vec<String>,
    /// 租户自定义字段
    pub custom_fields: serde_json::Value,
}

/// 目录服务
///
/// 可见性门控：所有企业读取都以(租户, 上架记录)连接为唯一入口，
/// 并在返回前合并租户内容覆盖。slug 在当前租户不可见时与全局
/// 不存在不可区分，统一表现为未找到。
pub struct DirectoryService {
    companies: Arc<dyn CompanyRepository>,
    contents: Arc<dyn CompanyContentRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl DirectoryService {
    /// 创建新的目录服务实例
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        contents: Arc<dyn CompanyContentRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            companies,
            contents,
            categories,
        }
    }

    /// 列出租户可见的企业
    ///
    /// 过滤器携带单个分类slug时会先展开为该主分类及其全部子分类的
    /// slug集合（并集），避免只在叶子层打标的企业被漏计。
    ///
    /// # 参数
    ///
    /// * `tenant` - 已解析的租户上下文
    /// * `filter` - 已校验的查询过滤器
    pub async fn list_companies(
        &self,
        tenant: &Tenant,
        filter: CompanyFilter,
    ) -> Result<Page<CompanyView>, DomainError> {
        let mut filter = filter;
        filter.category_slugs = self.expand_filter_categories(filter.category_slugs).await?;

        let page = self.companies.list_visible(tenant.id, &filter).await?;
        debug!(
            tenant = %tenant.hostname,
            total = page.total,
            page = page.page,
            "listed visible companies"
        );

        Ok(Page {
            items: page
                .items
                .into_iter()
                .map(|(company, content)| CompanyView::merge(company, Some(&content)))
                .collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// 按slug获取租户可见的企业视图
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(CompanyView))` - 企业在该租户可见
    /// * `Ok(None)` - slug不存在，或仅在其他租户可见（刻意不可区分）
    pub async fn get_company(
        &self,
        tenant: &Tenant,
        slug: &str,
    ) -> Result<Option<CompanyView>, DomainError> {
        match self.companies.find_visible_by_slug(tenant.id, slug).await? {
            Some((company, content)) => Ok(Some(CompanyView::merge(company, Some(&content)))),
            None => {
                counter!("directory_lookup_miss_total").increment(1);
                Ok(None)
            }
        }
    }

    /// 插入或更新企业在当前租户的上架记录
    ///
    /// 企业按slug全局查找（管理路径，不经过可见性门控）；
    /// 不存在时返回未找到。
    pub async fn upsert_listing(
        &self,
        tenant: &Tenant,
        slug: &str,
        draft: ListingDraft,
    ) -> Result<CompanyContent, DomainError> {
        let company = self
            .companies
            .find_by_slug(slug)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let now = Utc::now();
        let existing = self.contents.find(company.id, tenant.id).await?;
        let content = CompanyContent {
            id: existing.as_ref().map(|c| c.id).unwrap_or_else(Uuid::new_v4),
            company_id: company.id,
            tenant_id: tenant.id,
            is_visible: draft.is_visible,
            description: draft.description,
            promotions: draft.promotions,
            images: draft.images,
            custom_fields: draft.custom_fields,
            created_at: existing.as_ref().map(|c| c.created_at).unwrap_or(now),
            updated_at: now,
        };

        let stored = self.contents.upsert(&content).await?;
        info!(
            tenant = %tenant.hostname,
            company = %slug,
            visible = stored.is_visible,
            "listing upserted"
        );
        Ok(stored)
    }

    /// 删除企业在当前租户的上架记录
    pub async fn remove_listing(&self, tenant: &Tenant, slug: &str) -> Result<(), DomainError> {
        let company = self
            .companies
            .find_by_slug(slug)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.contents.delete(company.id, tenant.id).await?;
        info!(tenant = %tenant.hostname, company = %slug, "listing removed");
        Ok(())
    }

    async fn expand_filter_categories(
        &self,
        slugs: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut expanded = Vec::new();
        for slug in slugs {
            expanded.extend(expand_category_slugs(self.categories.as_ref(), &slug).await?);
        }
        expanded.dedup();
        Ok(expanded)
    }
}

#[cfg(test)]
#[path = "directory_service_test.rs"]
mod tests;
