// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 评论实体
///
/// 评论属于且仅属于一家企业，不做租户范围限定——企业在哪个租户上架，
/// 评论就在哪个租户展示。手工提交的评论需要审核（is_approved=false），
/// 外部同步的评论到达时即已审核并带来源标记。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// 评论唯一标识符
    pub id: Uuid,
    /// 所属企业ID
    pub company_id: Uuid,
    /// 作者名称
    pub author_name: String,
    /// 作者头像地址
    pub author_photo_url: Option<String>,
    /// 评分，取值范围 [1,5]
    pub rating: i32,
    /// 评论内容
    pub comment: Option<String>,
    /// 评论来源
    pub source: ReviewSource,
    /// 外部评论ID；(company_id, source, external_review_id) 构成幂等同步键
    pub external_review_id: Option<String>,
    /// 评论日期
    pub review_date: DateTime<Utc>,
    /// 是否激活
    pub is_active: bool,
    /// 是否已审核通过
    pub is_approved: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 评论来源枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSource {
    /// 外部Google评论同步
    Google,
    /// 站内手工提交
    #[default]
    Manual,
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReviewSource::Google => write!(f, "google"),
            ReviewSource::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for ReviewSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ReviewSource::Google),
            "manual" => Ok(ReviewSource::Manual),
            _ => Err(()),
        }
    }
}

/// 评分聚合结果
///
/// rating 为 None 表示“暂无评论”，与低分均值是不同状态；
/// 评分取值在 [1,5]，合法均值永远不会是 0。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    /// 合格评论的算术平均分（保留原始精度，展示层负责舍入）
    pub rating: Option<f64>,
    /// 合格评论数
    pub review_count: i64,
}

impl RatingSummary {
    /// 空聚合（无合格评论）
    pub fn empty() -> Self {
        Self {
            rating: None,
            review_count: 0,
        }
    }
}
