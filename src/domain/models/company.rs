// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::company_content::CompanyContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 企业实体
///
/// 表示一家真实的企业。企业是全平台唯一的实体，与上架它的租户数量
/// 无关；slug 在所有租户间全局唯一。企业存在评论历史时不会被硬删除，
/// 只能通过 is_active 软停用——企业级停用是硬覆盖，即使某租户的上架
/// 记录可见，企业也不会出现在该租户的结果中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// 企业唯一标识符
    pub id: Uuid,
    /// 企业名称
    pub name: String,
    /// URL安全的全局唯一标识
    pub slug: String,
    /// 基础描述（可被租户内容覆盖）
    pub description: Option<String>,
    /// 街道地址
    pub street_address: Option<String>,
    /// 邮政编码
    pub postal_code: Option<String>,
    /// 城市
    pub city: Option<String>,
    /// 联系电话
    pub phone: Option<String>,
    /// 联系邮箱
    pub email: Option<String>,
    /// 网站地址
    pub website: Option<String>,
    /// 基础图片列表
    pub images: Vec<String>,
    /// 纬度
    pub latitude: Option<f64>,
    /// 经度
    pub longitude: Option<f64>,
    /// 反规范化的平均评分；无合格评论时为 None（绝不渲染为 0.0）
    pub rating: Option<f64>,
    /// 反规范化的评论数
    pub review_count: i32,
    /// 是否激活
    pub is_active: bool,
    /// 分类slug集合（来自 company_categories 连接表）
    pub categories: Vec<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 排序键枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// 名称升序（默认）
    #[default]
    Name,
    /// 热门：评分降序（NULL排最后）、评论数降序、名称升序
    Popular,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Popular => write!(f, "popular"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "popular" => Ok(SortKey::Popular),
            _ => Err(()),
        }
    }
}

/// 企业查询过滤器
///
/// 所有字段在构造时即已校验；仓库实现可以直接使用。
/// 分类过滤携带的是已经展开的slug集合（主分类会包含其子分类）。
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    /// 全文搜索词（匹配名称与描述，不区分大小写）
    pub search: Option<String>,
    /// 分类slug集合（任意命中即可）
    pub category_slugs: Vec<String>,
    /// 城市（不区分大小写的相等匹配）
    pub city: Option<String>,
    /// 最低评分
    pub min_rating: Option<f64>,
    /// 排序键
    pub sort: SortKey,
    /// 页码（从1开始）
    pub page: u64,
    /// 每页条目数
    pub per_page: u64,
}

impl CompanyFilter {
    /// 从原始查询参数构造过滤器
    ///
    /// 格式错误的参数返回 `DomainError::InvalidFilter`，绝不静默修正。
    ///
    /// # 参数
    ///
    /// * `raw` - HTTP查询字符串解析出的原始参数
    /// * `default_per_page` - 未指定时的每页条目数
    /// * `max_per_page` - 每页条目数上限
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        search: Option<String>,
        category: Option<String>,
        city: Option<String>,
        sort: Option<String>,
        min_rating: Option<String>,
        page: Option<u64>,
        per_page: Option<u64>,
        default_per_page: u64,
        max_per_page: u64,
    ) -> Result<Self, DomainError> {
        let sort = match sort.as_deref() {
            None | Some("") => SortKey::default(),
            Some(s) => s
                .parse()
                .map_err(|_| DomainError::InvalidFilter(format!("unknown sort key '{}'", s)))?,
        };

        let min_rating = match min_rating.as_deref() {
            None | Some("") => None,
            Some(raw) => {
                let value: f64 = raw.parse().map_err(|_| {
                    DomainError::InvalidFilter(format!("min_rating '{}' is not numeric", raw))
                })?;
                if !(1.0..=5.0).contains(&value) {
                    return Err(DomainError::InvalidFilter(format!(
                        "min_rating {} is outside [1,5]",
                        value
                    )));
                }
                Some(value)
            }
        };

        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(DomainError::InvalidFilter(
                "page numbering starts at 1".to_string(),
            ));
        }

        let per_page = per_page.unwrap_or(default_per_page);
        if per_page == 0 || per_page > max_per_page {
            return Err(DomainError::InvalidFilter(format!(
                "per_page must be between 1 and {}",
                max_per_page
            )));
        }

        // The pagination offset is (page - 1) * per_page; a page number large
        // enough to overflow it can never address a real page.
        if (page - 1).checked_mul(per_page).is_none() {
            return Err(DomainError::InvalidFilter(format!(
                "page {} is out of range",
                page
            )));
        }

        Ok(Self {
            search: search.filter(|s| !s.trim().is_empty()),
            category_slugs: category.into_iter().filter(|s| !s.is_empty()).collect(),
            city: city.filter(|s| !s.trim().is_empty()),
            min_rating,
            sort,
            page,
            per_page,
        })
    }
}

/// 租户视角下的企业视图
///
/// 企业基础字段与租户内容覆盖逐字段合并后的结果。
/// `tenant_scoped` 为 false 表示视图未经过租户连接（管理全局视角），
/// 调用方不得将其当作某租户可见的结果。
#[derive(Debug, Clone, Serialize)]
pub struct CompanyView {
    /// 企业基础实体
    pub company: Company,
    /// 生效的描述：覆盖优先，其次基础值
    pub description: Option<String>,
    /// 生效的促销文案（仅来自租户覆盖）
    pub promotions: Option<String>,
    /// 生效的图片列表
    pub images: Vec<String>,
    /// 租户自定义字段
    pub custom_fields: serde_json::Value,
    /// 是否经过租户范围限定
    pub tenant_scoped: bool,
}

impl CompanyView {
    /// 合并企业基础字段与租户内容覆盖
    ///
    /// 逐字段优先级：覆盖值存在且非空则取覆盖值，否则取基础值，
    /// 否则缺省。`content` 为 None 时返回未限定租户的基础视图。
    /// 纯函数，无副作用。
    pub fn merge(company: Company, content: Option<&CompanyContent>) -> Self {
        match content {
            Some(content) => {
                let description = non_empty(content.description.as_deref())
                    .map(str::to_owned)
                    .or_else(|| company.description.clone());
                let promotions = non_empty(content.promotions.as_deref()).map(str::to_owned);
                let images = if content.images.is_empty() {
                    company.images.clone()
                } else {
                    content.images.clone()
                };
                let custom_fields = if content.custom_fields.is_null() {
                    serde_json::json!({})
                } else {
                    content.custom_fields.clone()
                };

                Self {
                    description,
                    promotions,
                    images,
                    custom_fields,
                    tenant_scoped: true,
                    company,
                }
            }
            None => Self {
                description: company.description.clone(),
                promotions: None,
                images: company.images.clone(),
                custom_fields: serde_json::json!({}),
                tenant_scoped: false,
                company,
            },
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
