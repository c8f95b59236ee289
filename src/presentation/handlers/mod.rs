// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分类处理器模块
pub mod category_handler;
/// 企业处理器模块
pub mod company_handler;
/// 租户内容处理器模块
pub mod content_handler;
/// 评论处理器模块
pub mod review_handler;
/// 租户处理器模块
pub mod tenant_handler;
