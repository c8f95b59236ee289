// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::Category;
use serde::{Deserialize, Serialize};

/// 分类响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryDto {
    /// URL安全的唯一标识
    pub slug: String,
    /// 默认展示名称
    pub label: String,
    /// 本地化名称映射
    pub names: serde_json::Value,
    /// 图标标识
    pub icon: Option<String>,
    /// 排序权重
    pub sort_order: i32,
    /// 当前租户下的可见企业数（含子分类并集，按企业去重）
    pub company_count: u64,
}

impl CategoryDto {
    /// 由分类实体与已统计的企业数构造
    pub fn from_category(category: Category, company_count: u64) -> Self {
        Self {
            slug: category.slug,
            label: category.label,
            names: category.names,
            icon: category.icon,
            sort_order: category.sort_order,
            company_count,
        }
    }
}

/// 分类计数响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryCountDto {
    /// 分类slug
    pub slug: String,
    /// 企业数（含子分类并集，按企业去重）
    pub company_count: u64,
}
