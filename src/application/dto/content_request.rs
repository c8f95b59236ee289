// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 租户内容上插请求数据传输对象
///
/// 覆盖整条(企业, 租户)上架记录；字段缺省表示清除对应覆盖，
/// 不做逐字段补丁合并。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ContentUpsertDto {
    /// 在当前租户上是否可见
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// 租户定制描述
    #[validate(length(max = 8000))]
    pub description: Option<String>,
    /// 租户促销文案
    #[validate(length(max = 4000))]
    pub promotions: Option<String>,
    /// 租户附加图片列表
    #[serde(default)]
    pub images: Vec<String>,
    /// 租户自定义字段
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,
}

fn default_visible() -> bool {
    true
}
