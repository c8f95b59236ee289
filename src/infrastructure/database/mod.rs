// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库连接模块
pub mod connection;

/// 数据库实体模块
pub mod entities;
