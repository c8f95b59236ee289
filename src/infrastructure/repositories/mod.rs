// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的sea-orm实现
pub mod category_repo_impl;
pub mod company_content_repo_impl;
pub mod company_repo_impl;
pub mod review_repo_impl;
pub mod tenant_repo_impl;

use sea_orm::DbErr;

/// 判断数据库错误是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("unique") || message.contains("duplicate")
}
