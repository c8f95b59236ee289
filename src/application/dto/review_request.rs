// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::review_service::{ExternalReview, ManualReviewSubmission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 手工评论提交请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ReviewSubmissionDto {
    /// 作者名称
    #[validate(length(min = 1, max = 255))]
    pub author_name: String,
    /// 作者头像地址
    #[validate(url)]
    pub author_photo_url: Option<String>,
    /// 评分，取值范围 [1,5]
    pub rating: i32,
    /// 评论内容
    #[validate(length(max = 4000))]
    pub comment: Option<String>,
}

impl From<ReviewSubmissionDto> for ManualReviewSubmission {
    fn from(dto: ReviewSubmissionDto) -> Self {
        Self {
            author_name: dto.author_name,
            author_photo_url: dto.author_photo_url,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// 外部评论同步请求数据传输对象
///
/// 同一批次只承载单一来源；每条评论携带外部ID，重复投递同一批次
/// 只会更新已有记录。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ReviewSyncRequestDto {
    /// 目标企业slug
    #[validate(length(min = 1, max = 255))]
    pub company_slug: String,
    /// 评论来源（"google" 或 "manual"）
    #[validate(length(min = 1))]
    pub source: String,
    /// 评论批次
    #[validate(nested)]
    pub reviews: Vec<ExternalReviewDto>,
}

/// 外部同步的单条评论数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ExternalReviewDto {
    /// 外部评论ID
    #[validate(length(min = 1, max = 255))]
    pub external_review_id: String,
    /// 作者名称
    #[validate(length(min = 1, max = 255))]
    pub author_name: String,
    /// 作者头像地址
    #[validate(url)]
    pub author_photo_url: Option<String>,
    /// 评分，取值范围 [1,5]
    pub rating: i32,
    /// 评论内容
    #[validate(length(max = 4000))]
    pub comment: Option<String>,
    /// 评论日期
    pub review_date: DateTime<Utc>,
}

impl From<ExternalReviewDto> for ExternalReview {
    fn from(dto: ExternalReviewDto) -> Self {
        Self {
            external_review_id: dto.external_review_id,
            author_name: dto.author_name,
            author_photo_url: dto.author_photo_url,
            rating: dto.rating,
            comment: dto.comment,
            review_date: dto.review_date,
        }
    }
}
