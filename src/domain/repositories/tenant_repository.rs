// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::tenant::Tenant;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束冲突
    #[error("Record violates a unique constraint: {0}")]
    Duplicate(String),
}

/// 租户仓库特质
///
/// 租户注册表的读取接口。请求路径上只读；租户的创建与停用
/// 由平台运维完成，不属于本服务范围。
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// 按主机名精确查找租户
    ///
    /// # 参数
    ///
    /// * `hostname` - 规范化后的主机名（小写，无端口、无www前缀）
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Tenant))` - 找到匹配的租户
    /// * `Ok(None)` - 无匹配记录
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_hostname(&self, hostname: &str) -> Result<Option<Tenant>, RepositoryError>;
}
