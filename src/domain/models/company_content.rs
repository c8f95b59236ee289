// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 企业内容实体（租户上架记录）
///
/// 表示“企业X上架在租户Y，并带有这些可选覆盖”。每个(企业, 租户)对
/// 至多一条记录；企业在某租户无记录时对该租户不可见，无论企业自身
/// 的激活标志如何。is_visible 用于隐藏而不丢失覆盖内容；只有企业
/// 从租户目录完全下架时才删除记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyContent {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 企业ID
    pub company_id: Uuid,
    /// 租户ID
    pub tenant_id: Uuid,
    /// 在该租户上是否可见
    pub is_visible: bool,
    /// 租户定制描述（覆盖企业基础描述）
    pub description: Option<String>,
    /// 租户促销文案
    pub promotions: Option<String>,
    /// 租户附加图片列表
    pub images: Vec<String>,
    /// 租户自定义字段
    pub custom_fields: serde_json::Value,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}
