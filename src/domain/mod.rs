// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域错误模块
///
/// 定义领域层的统一错误类型
pub mod errors;

/// 领域模型模块
///
/// 定义系统的核心业务实体
pub mod models;

/// 仓库接口模块
///
/// 定义数据访问的抽象接口
pub mod repositories;

/// 领域服务模块
///
/// 封装核心业务逻辑
pub mod services;
