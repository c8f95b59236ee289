// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Json;

use crate::application::dto::tenant_response::TenantResponseDto;
use crate::presentation::extractors::tenant::CurrentTenant;

/// 获取当前租户的品牌信息
///
/// # 返回值
///
/// 返回中间件解析出的租户的展示信息
pub async fn get_tenant(CurrentTenant(tenant): CurrentTenant) -> Json<TenantResponseDto> {
    Json(TenantResponseDto::from(tenant))
}
