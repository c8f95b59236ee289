// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::review::{RatingSummary, Review, ReviewSource};
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::domain::repositories::review_repository::ReviewRepository;
use crate::domain::repositories::tenant_repository::RepositoryError;
use chrono::{DateTime, Utc};
use metrics::counter;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 手工评论提交载荷
#[derive(Debug, Clone)]
pub struct ManualReviewSubmission {
    /// 作者名称
    pub author_name: String,
    /// 作者头像地址
    pub author_photo_url: Option<String>,
    /// 评分
    pub rating: i32,
    /// 评论内容
    pub comment: Option<String>,
}

/// 外部同步的单条评论
#[derive(Debug, Clone)]
pub struct ExternalReview {
    /// 外部评论ID（同步键的组成部分）
    pub external_review_id: String,
    /// 作者名称
    pub author_name: String,
    /// 作者头像地址
    pub author_photo_url: Option<String>,
    /// 评分
    pub rating: i32,
    /// 评论内容
    pub comment: Option<String>,
    /// 评论日期
    pub review_date: DateTime<Utc>,
}

/// 外部同步结果
#[derive(Debug, Clone, Copy)]
pub struct SyncOutcome {
    /// 新插入的评论数
    pub created: u64,
    /// 更新的已有评论数
    pub updated: u64,
    /// 同步后重新计算的评分聚合
    pub summary: RatingSummary,
}

/// 评论服务
///
/// 评分聚合收敛在 recompute_aggregate 一个操作里，仅由外部同步
/// 与人工审核两个调用方触发，不在各处内联重算。聚合总是基于当前
/// 全量合格评论集计算，因此重复执行是幂等的，并发同步无需显式锁
/// ——幂等上插键由 (company_id, source, external_review_id) 唯一
/// 约束保证。
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ReviewService {
    /// 创建新的评论服务实例
    pub fn new(reviews: Arc<dyn ReviewRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { reviews, companies }
    }

    /// 列出某企业的公开评论（激活且已审核）
    pub async fn list_public(&self, company_id: Uuid) -> Result<Vec<Review>, DomainError> {
        Ok(self.reviews.list_public_by_company(company_id).await?)
    }

    /// 提交手工评论
    ///
    /// 校验评分范围后创建待审核（is_approved=false）的评论；
    /// 不触碰评分聚合。
    pub async fn submit_manual(
        &self,
        company_id: Uuid,
        submission: ManualReviewSubmission,
    ) -> Result<Review, DomainError> {
        validate_rating(submission.rating)?;

        let now = Utc::now();
        let review = Review {
            id: Uuid::new_v4(),
            company_id,
            author_name: submission.author_name,
            author_photo_url: submission.author_photo_url,
            rating: submission.rating,
            comment: submission.comment,
            source: ReviewSource::Manual,
            external_review_id: None,
            review_date: now,
            is_active: true,
            is_approved: false,
            created_at: now,
            updated_at: now,
        };

        let stored = self.reviews.create(&review).await?;
        info!(company_id = %company_id, review_id = %stored.id, "manual review submitted, pending approval");
        Ok(stored)
    }

    /// 审核通过一条评论，并重算所属企业的评分聚合
    pub async fn approve(&self, review_id: Uuid) -> Result<RatingSummary, DomainError> {
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.reviews.mark_approved(review_id).await?;
        info!(review_id = %review_id, company_id = %review.company_id, "review approved");

        self.recompute_aggregate(review.company_id).await
    }

    /// 批量同步外部评论
    ///
    /// 逐条按幂等键上插（重复投递只更新可变字段），全部落库后
    /// 重算一次评分聚合。外部评论到达时即已审核。
    pub async fn sync_external(
        &self,
        company_id: Uuid,
        source: ReviewSource,
        batch: Vec<ExternalReview>,
    ) -> Result<SyncOutcome, DomainError> {
        for item in &batch {
            validate_rating(item.rating)?;
        }

        let mut created = 0u64;
        let mut updated = 0u64;
        let now = Utc::now();

        for item in batch {
            let review = Review {
                id: Uuid::new_v4(),
                company_id,
                author_name: item.author_name,
                author_photo_url: item.author_photo_url,
                rating: item.rating,
                comment: item.comment,
                source,
                external_review_id: Some(item.external_review_id),
                review_date: item.review_date,
                is_active: true,
                is_approved: true,
                created_at: now,
                updated_at: now,
            };

            if self.reviews.upsert_external(&review).await? {
                created += 1;
            } else {
                updated += 1;
            }
        }

        counter!("review_sync_upserts_total").increment(created + updated);
        let summary = self.recompute_aggregate(company_id).await?;
        info!(
            company_id = %company_id,
            source = %source,
            created,
            updated,
            "external review sync completed"
        );

        Ok(SyncOutcome {
            created,
            updated,
            summary,
        })
    }

    /// 按企业slug批量同步外部评论
    ///
    /// 运营路径：企业按slug全局查找，不经过租户可见性门控。
    pub async fn sync_external_by_slug(
        &self,
        slug: &str,
        source: ReviewSource,
        batch: Vec<ExternalReview>,
    ) -> Result<SyncOutcome, DomainError> {
        let company = self
            .companies
            .find_by_slug(slug)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        self.sync_external(company.id, source, batch).await
    }

    /// 重算企业的评分聚合
    ///
    /// 基于当前全量合格评论集（激活且已审核）计算算术平均分，
    /// 零条合格评论时 rating 为 None。聚合以单行更新写回企业记录，
    /// 整个操作可安全重复执行。
    pub async fn recompute_aggregate(&self, company_id: Uuid) -> Result<RatingSummary, DomainError> {
        let qualifying = self.reviews.list_public_by_company(company_id).await?;

        let summary = if qualifying.is_empty() {
            RatingSummary::empty()
        } else {
            let sum: i64 = qualifying.iter().map(|r| r.rating as i64).sum();
            RatingSummary {
                rating: Some(sum as f64 / qualifying.len() as f64),
                review_count: qualifying.len() as i64,
            }
        };

        self.companies
            .update_rating(company_id, summary.rating, summary.review_count as i32)
            .await?;

        Ok(summary)
    }
}

fn validate_rating(rating: i32) -> Result<(), DomainError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::RatingOutOfRange(rating))
    }
}

#[cfg(test)]
#[path = "review_service_test.rs"]
mod tests;
