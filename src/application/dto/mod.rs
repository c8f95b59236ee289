// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 封装HTTP边界的请求与响应结构
/// 请求DTO负责反序列化与校验，响应DTO负责展示层整形（如评分舍入）
pub mod category_response;
pub mod company_query;
pub mod company_response;
pub mod content_request;
pub mod review_request;
pub mod review_response;
pub mod tenant_response;
