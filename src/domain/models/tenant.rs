// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 租户实体
///
/// 表示一个城市品牌域名实例（如 haguenau.pro）。所有租户共享同一个
/// 企业目录，但各自只能看到通过企业内容记录显式上架的子集。
/// 租户只会被停用，不会被删除，以保留历史上架关联。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// 租户唯一标识符
    pub id: Uuid,
    /// 主机名，全局唯一的语义键（小写，无协议、无端口）
    pub hostname: String,
    /// 展示名称
    pub display_name: String,
    /// 是否激活；停用的租户不再对外提供服务
    pub is_active: bool,
    /// 品牌主色
    pub primary_color: Option<String>,
    /// 品牌Logo地址
    pub logo_url: Option<String>,
    /// 自由格式的租户设置
    pub settings: serde_json::Value,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}
