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

use crate::domain::models::review::{Review, ReviewSource};
use crate::domain::repositories::review_repository::ReviewRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use crate::infrastructure::database::entities::review as review_entity;
use crate::infrastructure::repositories::is_unique_violation;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 评论仓库实现
pub struct ReviewRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryImpl {
    /// 创建新的评论仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_sync_key(
        &self,
        review: &Review,
    ) -> Result<Option<review_entity::Model>, RepositoryError> {
        let model = review_entity::Entity::find()
            .filter(review_entity::Column::CompanyId.eq(review.company_id))
            .filter(review_entity::Column::Source.eq(review.source.to_string()))
            .filter(review_entity::Column::ExternalReviewId.eq(review.external_review_id.clone()))
            .one(self.db.as_ref())
            .await?;
        Ok(model)
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, review: &Review) -> Result<Review, RepositoryError> {
        let model = to_active(review);
        let inserted = model.insert(self.db.as_ref()).await?;
        to_domain(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, RepositoryError> {
        let model = review_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(to_domain).transpose()
    }

    async fn list_public_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<Review>, RepositoryError> {
        let models = review_entity::Entity::find()
            .filter(review_entity::Column::CompanyId.eq(company_id))
            .filter(review_entity::Column::IsActive.eq(true))
            .filter(review_entity::Column::IsApproved.eq(true))
            .order_by_desc(review_entity::Column::ReviewDate)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(to_domain).collect()
    }

    async fn mark_approved(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = review_entity::ActiveModel {
            id: Set(id),
            is_approved: Set(true),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        match model.update(self.db.as_ref()).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn upsert_external(&self, review: &Review) -> Result<bool, RepositoryError> {
        match self.find_by_sync_key(review).await? {
            Some(existing) => {
                let mut active: review_entity::ActiveModel = existing.into();
                active.rating = Set(review.rating);
                active.comment = Set(review.comment.clone());
                active.author_name = Set(review.author_name.clone());
                active.author_photo_url = Set(review.author_photo_url.clone());
                active.review_date = Set(review.review_date.into());
                active.updated_at = Set(review.updated_at.into());
                active.update(self.db.as_ref()).await?;
                Ok(false)
            }
            None => match to_active(review).insert(self.db.as_ref()).await {
                Ok(_) => Ok(true),
                // Concurrent sync for the same key; caller retries the batch
                Err(e) if is_unique_violation(&e) => Err(RepositoryError::Duplicate(format!(
                    "review sync key ({}, {}, {:?})",
                    review.company_id, review.source, review.external_review_id
                ))),
                Err(e) => Err(e.into()),
            },
        }
    }
}

fn to_active(review: &Review) -> review_entity::ActiveModel {
    review_entity::ActiveModel {
        id: Set(review.id),
        company_id: Set(review.company_id),
        author_name: Set(review.author_name.clone()),
        author_photo_url: Set(review.author_photo_url.clone()),
        rating: Set(review.rating),
        comment: Set(review.comment.clone()),
        source: Set(review.source.to_string()),
        external_review_id: Set(review.external_review_id.clone()),
        review_date: Set(review.review_date.into()),
        is_active: Set(review.is_active),
        is_approved: Set(review.is_approved),
        created_at: Set(review.created_at.into()),
        updated_at: Set(review.updated_at.into()),
    }
}

fn to_domain(m: review_entity::Model) -> Result<Review, RepositoryError> {
    let source: ReviewSource = m
        .source
        .parse()
        .map_err(|_| RepositoryError::Database(DbErr::Custom("Invalid review source".to_string())))?;

    Ok(Review {
        id: m.id,
        company_id: m.company_id,
        author_name: m.author_name,
        author_photo_url: m.author_photo_url,
        rating: m.rating,
        comment: m.comment,
        source,
        external_review_id: m.external_review_id,
        review_date: m.review_date.into(),
        is_active: m.is_active,
        is_approved: m.is_approved,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    })
}
