// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 租户解析服务（tenant_resolver）：将入站Host头解析为租户上下文
/// - 目录服务（directory_service）：租户可见性门控与内容覆盖合并
/// - 分类服务（category_service）：两级分类树与租户范围内的企业计数
/// - 评论服务（review_service）：评论提交、审核、外部同步与评分聚合
pub mod category_service;
pub mod directory_service;
pub mod review_service;
pub mod tenant_resolver;
