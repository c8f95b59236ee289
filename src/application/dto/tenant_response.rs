// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::tenant::Tenant;
use serde::{Deserialize, Serialize};

/// 租户响应数据传输对象
///
/// 页面外壳渲染所需的租户品牌信息；不暴露内部ID与激活标志
#[derive(Debug, Deserialize, Serialize)]
pub struct TenantResponseDto {
    /// 租户主机名
    pub hostname: String,
    /// 展示名称
    pub display_name: String,
    /// 品牌主色
    pub primary_color: Option<String>,
    /// 品牌Logo地址
    pub logo_url: Option<String>,
    /// 租户设置
    pub settings: serde_json::Value,
}

impl From<Tenant> for TenantResponseDto {
    fn from(tenant: Tenant) -> Self {
        Self {
            hostname: tenant.hostname,
            display_name: tenant.display_name,
            primary_color: tenant.primary_color,
            logo_url: tenant.logo_url,
            settings: tenant.settings,
        }
    }
}
