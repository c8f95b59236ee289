// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 租户（tenant）：一个城市品牌域名实例
/// - 企业（company）：全平台共享的企业目录条目
/// - 企业内容（company_content）：企业在某租户上的上架记录与内容覆盖
/// - 分类（category）：两级分类树，全租户共享
/// - 评论（review）：企业级评论，随企业出现在所有上架租户
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod category;
pub mod company;
pub mod company_content;
pub mod review;
pub mod tenant;

use serde::Serialize;

/// 分页结果
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// 当前页条目
    pub items: Vec<T>,
    /// 符合条件的条目总数
    pub total: u64,
    /// 页码（从1开始）
    pub page: u64,
    /// 每页条目数
    pub per_page: u64,
}
