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

use crate::domain::models::company_content::CompanyContent;
use crate::domain::repositories::company_content_repository::CompanyContentRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::infrastructure::database::entities::company_content as content_entity;
use crate::infrastructure::repositories::is_unique_violation;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 企业内容仓库实现
pub struct CompanyContentRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CompanyContentRepositoryImpl {
    /// 创建新的企业内容仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyContentRepository for CompanyContentRepositoryImpl {
    async fn find(
        &self,
        company_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<CompanyContent>, RepositoryError> {
        let model = content_entity::Entity::find()
            .filter(content_entity::Column::CompanyId.eq(company_id))
            .filter(content_entity::Column::TenantId.eq(tenant_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }

    async fn upsert(&self, content: &CompanyContent) -> Result<CompanyContent, RepositoryError> {
        let existing = content_entity::Entity::find()
            .filter(content_entity::Column::CompanyId.eq(content.company_id))
            .filter(content_entity::Column::TenantId.eq(content.tenant_id))
            .one(self.db.as_ref())
            .await?;

        match existing {
            Some(model) => {
                let mut active: content_entity::ActiveModel = model.into();
                active.is_visible = Set(content.is_visible);
                active.description = Set(content.description.clone());
                active.promotions = Set(content.promotions.clone());
                active.images = Set(images_json(&content.images));
                active.custom_fields = Set(content.custom_fields.clone());
                active.updated_at = Set(content.updated_at.into());

                let updated = active.update(self.db.as_ref()).await?;
                Ok(to_domain(updated))
            }
            None => {
                let model = content_entity::ActiveModel {
                    id: Set(content.id),
                    company_id: Set(content.company_id),
                    tenant_id: Set(content.tenant_id),
                    is_visible: Set(content.is_visible),
                    description: Set(content.description.clone()),
                    promotions: Set(content.promotions.clone()),
                    images: Set(images_json(&content.images)),
                    custom_fields: Set(content.custom_fields.clone()),
                    created_at: Set(content.created_at.into()),
                    updated_at: Set(content.updated_at.into()),
                };

                match model.insert(self.db.as_ref()).await {
                    Ok(inserted) => Ok(to_domain(inserted)),
                    // (company_id, tenant_id) unique index lost a concurrent race
                    Err(e) if is_unique_violation(&e) => Err(RepositoryError::Duplicate(format!(
                        "listing ({}, {})",
                        content.company_id, content.tenant_id
                    ))),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    async fn delete(&self, company_id: Uuid, tenant_id: Uuid) -> Result<(), RepositoryError> {
        let result = content_entity::Entity::delete_many()
            .filter(content_entity::Column::CompanyId.eq(company_id))
            .filter(content_entity::Column::TenantId.eq(tenant_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

fn images_json(images: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        images
            .iter()
            .map(|i| serde_json::Value::String(i.clone()))
            .collect(),
    )
}

fn to_domain(m: content_entity::Model) -> CompanyContent {
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
