// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::CompanyView;
use crate::domain::models::Page;
use serde::{Deserialize, Serialize};

/// 企业视图响应数据传输对象
///
/// 租户覆盖合并后的企业展示形态。评分在此舍入到一位小数；
/// 无评论时评分字段缺省，绝不渲染 0.0。
#[derive(Debug, Deserialize, Serialize)]
pub struct CompanyViewDto {
    /// URL安全标识
    pub slug: String,
    /// 企业名称
    pub name: String,
    /// 生效的描述
    pub description: Option<String>,
    /// 促销文案
    pub promotions: Option<String>,
    /// 图片列表
    pub images: Vec<String>,
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
    /// 纬度
    pub latitude: Option<f64>,
    /// 经度
    pub longitude: Option<f64>,
    /// 平均评分（一位小数）；None表示暂无评论
    pub rating: Option<f64>,
    /// 评论数
    pub review_count: i32,
    /// 分类slug集合
    pub categories: Vec<String>,
    /// 租户自定义字段
    pub custom_fields: serde_json::Value,
}

impl From<CompanyView> for CompanyViewDto {
    fn from(view: CompanyView) -> Self {
        let company = view.company;
        Self {
            slug: company.slug,
            name: company.name,
            description: view.description,
            promotions: view.promotions,
            images: view.images,
            street_address: company.street_address,
            postal_code: company.postal_code,
            city: company.city,
            phone: company.phone,
            email: company.email,
            website: company.website,
            latitude: company.latitude,
            longitude: company.longitude,
            rating: company.rating.map(|r| (r * 10.0).round() / 10.0),
            review_count: company.review_count,
            categories: company.categories,
            custom_fields: view.custom_fields,
        }
    }
}

/// 企业列表响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct CompanyListResponseDto {
    /// 当前页条目
    pub items: Vec<CompanyViewDto>,
    /// 符合条件的条目总数
    pub total: u64,
    /// 页码
    pub page: u64,
    /// 每页条目数
    pub per_page: u64,
}

impl From<Page<CompanyView>> for CompanyListResponseDto {
    fn from(page: Page<CompanyView>) -> Self {
        Self {
            items: page.items.into_iter().map(CompanyViewDto::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        }
    }
}
