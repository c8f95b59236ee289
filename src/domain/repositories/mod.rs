// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义各实体的数据访问抽象接口，遵循依赖倒置原则，
/// 确保领域层不依赖具体的数据存储实现
pub mod category_repository;
pub mod company_content_repository;
pub mod company_repository;
pub mod review_repository;
pub mod tenant_repository;
