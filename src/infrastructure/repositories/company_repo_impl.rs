// Copyright 2025 Annuaire
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::company::{Company, CompanyFilter, SortKey};
use crate::domain::models::company_content::CompanyContent;
use crate::domain::models::Page;
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::infrastructure::database::entities::category as category_entity;
use crate::infrastructure::database::entities::company as company_entity;
use crate::infrastructure::database::entities::company_category as company_category_entity;
use crate::infrastructure::database::entities::company_content as content_entity;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, NullOrdering};
use sea_orm::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// 企业仓库实现
///
/// 租户范围的读取全部从 company_contents 出发：先取该租户可见的
/// 上架记录，再在其企业ID集合内查询，结果集里不可能出现未上架的
/// 企业——隔离是结构性的，不存在事后过滤的旁路。
pub struct CompanyRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryImpl {
    /// 创建新的企业仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 取某租户可见的上架记录，按企业ID索引
    async fn visible_contents(
        &self,
        tenant_id: Uuid,
    ) -> Result<HashMap<Uuid, content_entity::Model>, RepositoryError> {
        let rows = content_entity::Entity::find()
            .filter(content_entity::Column::TenantId.eq(tenant_id))
            .filter(content_entity::Column::IsVisible.eq(true))
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(|m| (m.company_id, m)).collect())
    }

    /// 取挂在给定分类slug集合下的企业ID集合
    async fn tagged_company_ids(
        &self,
        category_slugs: &[String],
    ) -> Result<HashSet<Uuid>, RepositoryError> {
        let category_ids: Vec<Uuid> = category_entity::Entity::find()
            .filter(category_entity::Column::Slug.is_in(category_slugs.to_vec()))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if category_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = company_category_entity::Entity::find()
            .filter(company_category_entity::Column::CategoryId.is_in(category_ids))
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(|m| m.company_id).collect())
    }

    /// 批量加载企业的分类slug
    async fn category_slugs_for(
        &self,
        company_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<String>>, RepositoryError> {
        if company_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = company_category_entity::Entity::find()
            .filter(company_category_entity::Column::CompanyId.is_in(company_ids.to_vec()))
            .all(self.db.as_ref())
            .await?;

        let category_ids: Vec<Uuid> = links.iter().map(|l| l.category_id).collect();
        let slug_by_id: HashMap<Uuid, String> = category_entity::Entity::find()
            .filter(category_entity::Column::Id.is_in(category_ids))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|c| (c.id, c.slug))
            .collect();

        let mut result: HashMap<Uuid, Vec<String>> = HashMap::new();
        for link in links {
            if let Some(slug) = slug_by_id.get(&link.category_id) {
                result.entry(link.company_id).or_default().push(slug.clone());
            }
        }
        Ok(result)
    }

    /// 在可见企业ID集合上应用过滤条件
    async fn filtered_query(
        &self,
        visible_ids: Vec<Uuid>,
        filter: &CompanyFilter,
    ) -> Result<Option<Select<company_entity::Entity>>, RepositoryError> {
        let mut query = company_entity::Entity::find()
            .filter(company_entity::Column::Id.is_in(visible_ids))
            .filter(company_entity::Column::IsActive.eq(true));

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(company_entity::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(company_entity::Column::Description)))
                            .like(pattern),
                    ),
            );
        }

        if let Some(city) = &filter.city {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(company_entity::Column::City)))
                    .eq(city.to_lowercase()),
            );
        }

        if let Some(min_rating) = filter.min_rating {
            query = query.filter(company_entity::Column::Rating.gte(min_rating));
        }

        if !filter.category_slugs.is_empty() {
            let tagged = self.tagged_company_ids(&filter.category_slugs).await?;
            if tagged.is_empty() {
                return Ok(None);
            }
            query = query.filter(
                company_entity::Column::Id.is_in(tagged.into_iter().collect::<Vec<_>>()),
            );
        }

        Ok(Some(query))
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryImpl {
    async fn list_visible(
        &self,
        tenant_id: Uuid,
        filter: &CompanyFilter,
    ) -> Result<Page<(Company, CompanyContent)>, RepositoryError> {
        let empty_page = |filter: &CompanyFilter| Page {
            items: vec![],
            total: 0,
            page: filter.page,
            per_page: filter.per_page,
        };

        let contents = self.visible_contents(tenant_id).await?;
        if contents.is_empty() {
            return Ok(empty_page(filter));
        }

        let visible_ids: Vec<Uuid> = contents.keys().copied().collect();
        let Some(query) = self.filtered_query(visible_ids, filter).await? else {
            return Ok(empty_page(filter));
        };

        let total = query.clone().count(self.db.as_ref()).await?;

        // A page number whose offset overflows can never address a real row.
        let Some(offset) = filter.page.saturating_sub(1).checked_mul(filter.per_page) else {
            return Ok(Page {
                items: vec![],
                total,
                page: filter.page,
                per_page: filter.per_page,
            });
        };

        let query = match filter.sort {
            SortKey::Name => query.order_by_asc(company_entity::Column::Name),
            SortKey::Popular => query
                .order_by_with_nulls(
                    company_entity::Column::Rating,
                    Order::Desc,
                    NullOrdering::Last,
                )
                .order_by_desc(company_entity::Column::ReviewCount)
                .order_by_asc(company_entity::Column::Name),
        };

        let models = query
            .offset(offset)
            .limit(filter.per_page)
            .all(self.db.as_ref())
            .await?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut slugs_by_company = self.category_slugs_for(&ids).await?;

        let items = models
            .into_iter()
            .filter_map(|m| {
                let content = contents.get(&m.id)?.clone();
                let categories = slugs_by_company.remove(&m.id).unwrap_or_default();
                Some((to_domain(m, categories), content_to_domain(content)))
            })
            .collect();

        Ok(Page {
            items,
            total,
            page: filter.page,
            per_page: filter.per_page,
        })
    }

    async fn find_visible_by_slug(
        &self,
        tenant_id: Uuid,
        slug: &str,
    ) -> Result<Option<(Company, CompanyContent)>, RepositoryError> {
        let Some(company) = company_entity::Entity::find()
            .filter(company_entity::Column::Slug.eq(slug))
            .filter(company_entity::Column::IsActive.eq(true))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let Some(content) = content_entity::Entity::find()
            .filter(content_entity::Column::CompanyId.eq(company.id))
            .filter(content_entity::Column::TenantId.eq(tenant_id))
            .filter(content_entity::Column::IsVisible.eq(true))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut slugs = self.category_slugs_for(&[company.id]).await?;
        let categories = slugs.remove(&company.id).unwrap_or_default();

        Ok(Some((
            to_domain(company, categories),
            content_to_domain(content),
        )))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>, RepositoryError> {
        let Some(company) = company_entity::Entity::find()
            .filter(company_entity::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut slugs = self.category_slugs_for(&[company.id]).await?;
        let categories = slugs.remove(&company.id).unwrap_or_default();
        Ok(Some(to_domain(company, categories)))
    }

    async fn count_visible_in_categories(
        &self,
        tenant_id: Uuid,
        category_slugs: &[String],
    ) -> Result<u64, RepositoryError> {
        let contents = self.visible_contents(tenant_id).await?;
        if contents.is_empty() {
            return Ok(0);
        }

        let tagged = self.tagged_company_ids(category_slugs).await?;
        let candidates: Vec<Uuid> = contents
            .keys()
            .filter(|id| tagged.contains(id))
            .copied()
            .collect();
        if candidates.is_empty() {
            return Ok(0);
        }

        let count = company_entity::Entity::find()
            .filter(company_entity::Column::Id.is_in(candidates))
            .filter(company_entity::Column::IsActive.eq(true))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn count_in_categories_global(
        &self,
        category_slugs: &[String],
    ) -> Result<u64, RepositoryError> {
        let tagged = self.tagged_company_ids(category_slugs).await?;
        if tagged.is_empty() {
            return Ok(0);
        }

        let count = company_entity::Entity::find()
            .filter(company_entity::Column::Id.is_in(tagged.into_iter().collect::<Vec<_>>()))
            .filter(company_entity::Column::IsActive.eq(true))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn update_rating(
        &self,
        company_id: Uuid,
        rating: Option<f64>,
        review_count: i32,
    ) -> Result<(), RepositoryError> {
        let model = company_entity::ActiveModel {
            id: Set(company_id),
            rating: Set(rating),
            review_count: Set(review_count),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        match model.update(self.db.as_ref()).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

fn to_domain(m: company_entity::Model, categories: Vec<String>) -> Company {
    Company {
        id: m.id,
        name: m.name,
        slug: m.slug,
        description: m.description,
        street_address: m.street_address,
        postal_code: m.postal_code,
        city: m.city,
        phone: m.phone,
        email: m.email,
        website: m.website,
        images: serde_json::from_value(m.images).unwrap_or_default(),
        latitude: m.latitude,
        longitude: m.longitude,
        rating: m.rating,
        review_count: m.review_count,
        is_active: m.is_active,
        categories,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn content_to_domain(m: content_entity::Model) -> CompanyContent {
    CompanyContent {
        id: m.id,
        company_id: m.company_id,
        tenant_id: m.tenant_id,
        is_visible: m.is_visible,
        description: m.description,
        promotions: m.promotions,
        images: serde_json::from_value(m.images).unwrap_or_default(),
        custom_fields: m.custom_fields,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}
