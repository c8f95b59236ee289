// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// sea-orm实体定义，与migration成员crate中的表结构一一对应
pub mod category;
pub mod company;
pub mod company_category;
pub mod company_content;
pub mod review;
pub mod tenant;
