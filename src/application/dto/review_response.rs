// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::review::Review;
use crate::domain::services::review_service::SyncOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 评论响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ReviewDto {
    /// 评论唯一标识符
    pub id: Uuid,
    /// 作者名称
    pub author_name: String,
    /// 作者头像地址
    pub author_photo_url: Option<String>,
    /// 评分
    pub rating: i32,
    /// 评论内容
    pub comment: Option<String>,
    /// 评论来源
    pub source: String,
    /// 评论日期
    pub review_date: DateTime<Utc>,
    /// 是否已审核通过
    pub is_approved: bool,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            author_name: review.author_name,
            author_photo_url: review.author_photo_url,
            rating: review.rating,
            comment: review.comment,
            source: review.source.to_string(),
            review_date: review.review_date,
            is_approved: review.is_approved,
        }
    }
}

/// 外部同步结果响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct SyncOutcomeDto {
    /// 新插入的评论数
    pub created: u64,
    /// 更新的已有评论数
    pub updated: u64,
    /// 同步后的平均评分（一位小数）
    pub rating: Option<f64>,
    /// 同步后的评论数
    pub review_count: i64,
}

impl From<SyncOutcome> for SyncOutcomeDto {
    fn from(outcome: SyncOutcome) -> Self {
        Self {
            created: outcome.created,
            updated: outcome.updated,
            rating: outcome.summary.rating.map(|r| (r * 10.0).round() / 10.0),
            review_count: outcome.summary.review_count,
        }
    }
}

/// 评分聚合响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct RatingSummaryDto {
    /// 平均评分（一位小数）；None表示暂无评论
    pub rating: Option<f64>,
    /// 评论数
    pub review_count: i64,
}

impl From<crate::domain::models::review::RatingSummary> for RatingSummaryDto {
    fn from(summary: crate::domain::models::review::RatingSummary) -> Self {
        Self {
            rating: summary.rating.map(|r| (r * 10.0).round() / 10.0),
            review_count: summary.review_count,
        }
    }
}
