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

use crate::domain::models::category::Category;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::infrastructure::database::entities::category as category_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 分类仓库实现
pub struct CategoryRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryImpl {
    /// 创建新的分类仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn list_main(&self) -> Result<Vec<Category>, RepositoryError> {
        let models = category_entity::Entity::find()
            .filter(category_entity::Column::ParentId.is_null())
            .order_by_asc(category_entity::Column::SortOrder)
            .order_by_asc(category_entity::Column::Label)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let model = category_entity::Entity::find()
            .filter(category_entity::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }

    async fn list_children(&self, parent_id: Uuid) -> Result<Vec<Category>, RepositoryError> {
        let models = category_entity::Entity::find()
            .filter(category_entity::Column::ParentId.eq(parent_id))
            .order_by_asc(category_entity::Column::SortOrder)
            .order_by_asc(category_entity::Column::Label)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }
}

fn to_domain(m: category_entity::Model) -> Category {
    Category {
        id: m.id,
        slug: m.slug,
        label: m.label,
        names: m.names,
        parent_id: m.parent_id,
        icon: m.icon,
        sort_order: m.sort_order,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}
