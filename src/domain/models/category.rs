// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 分类实体
///
/// 受控分类树的节点，全租户共享，由平台集中管理。两级层次：
/// parent_id 为 None 的是主分类，子分类的 parent_id 必须指向主分类
/// （按约定维护，不做通用图遍历）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// 分类唯一标识符
    pub id: Uuid,
    /// URL安全的唯一标识
    pub slug: String,
    /// 默认展示名称
    pub label: String,
    /// 本地化名称映射（语言代码 → 名称）
    pub names: serde_json::Value,
    /// 父分类ID；None表示主分类
    pub parent_id: Option<Uuid>,
    /// 图标标识
    pub icon: Option<String>,
    /// 排序权重
    pub sort_order: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// 是否为主分类
    pub fn is_main(&self) -> bool {
        self.parent_id.is_none()
    }
}
