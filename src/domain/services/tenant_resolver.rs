// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::tenant::Tenant;
use crate::domain::repositories::tenant_repository::TenantRepository;
use crate::infrastructure::cache::tenant_cache::TenantCache;
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// 规范化入站Host头
///
/// 去掉第一个冒号之后的内容（端口），去掉一个 `www.` 前缀，
/// 转换为小写。对任意主机名 h，规范化后再解析与直接解析
/// 结果相同。
pub fn normalize_host(host_header: &str) -> String {
    let host = host_header
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

/// 租户解析服务
///
/// 每个请求在边界处解析一次，解析出的租户作为显式参数向下传递，
/// 不存在环境级/全局的“当前租户”状态。Host头无法匹配任何激活租户时
/// 回退到配置的默认租户——这是显式的可用性策略，按warn级别记录并
/// 计入指标，而不是静默吞掉的错误。
pub struct TenantResolver {
    repo: Arc<dyn TenantRepository>,
    cache: TenantCache,
    default_hostname: String,
}

impl TenantResolver {
    /// 创建新的租户解析服务实例
    ///
    /// # 参数
    ///
    /// * `repo` - 租户仓库
    /// * `default_hostname` - 回退租户的主机名
    /// * `cache_capacity` - 缓存容量
    /// * `cache_ttl` - 缓存TTL
    pub fn new(
        repo: Arc<dyn TenantRepository>,
        default_hostname: &str,
        cache_capacity: usize,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            cache: TenantCache::new(cache_capacity, cache_ttl),
            default_hostname: normalize_host(default_hostname),
        }
    }

    /// 将原始Host头解析为租户
    ///
    /// # 参数
    ///
    /// * `host_header` - 入站HTTP Host头原始值，可能带端口或www前缀
    ///
    /// # 返回值
    ///
    /// * `Ok(Tenant)` - 匹配的激活租户，或回退的默认租户
    /// * `Err(DomainError::TenantNotResolved)` - 默认租户本身缺失（部署错误）
    pub async fn resolve(&self, host_header: &str) -> Result<Tenant, DomainError> {
        let hostname = normalize_host(host_header);

        if let Some(tenant) = self.lookup_active(&hostname).await? {
            debug!(hostname = %hostname, tenant = %tenant.display_name, "tenant resolved");
            return Ok(tenant);
        }

        // Unmatched or inactive host: recovered condition, served by the
        // default tenant so DNS/config drift never turns into hard errors.
        warn!(
            host = %hostname,
            fallback = %self.default_hostname,
            "host did not resolve to an active tenant, serving default"
        );
        counter!("tenant_resolution_fallback_total").increment(1);

        match self.lookup_active(&self.default_hostname).await? {
            Some(tenant) => Ok(tenant),
            None => Err(DomainError::TenantNotResolved(
                self.default_hostname.clone(),
            )),
        }
    }

    /// 校验默认租户已注册且激活
    ///
    /// 在服务启动时调用，让配置错误在部署期暴露而不是在请求期。
    pub async fn verify_default(&self) -> Result<Tenant, DomainError> {
        self.lookup_active(&self.default_hostname)
            .await?
            .ok_or_else(|| DomainError::TenantNotResolved(self.default_hostname.clone()))
    }

    /// 默认租户ID（用于快速判断某租户是否为回退租户）
    pub async fn default_tenant_id(&self) -> Result<Uuid, DomainError> {
        Ok(self.verify_default().await?.id)
    }

    async fn lookup_active(&self, hostname: &str) -> Result<Option<Tenant>, DomainError> {
        if let Some(tenant) = self.cache.get(hostname) {
            return Ok(Some(tenant));
        }

        match self.repo.find_by_hostname(hostname).await? {
            Some(tenant) if tenant.is_active => {
                self.cache.insert(tenant.clone());
                Ok(Some(tenant))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "tenant_resolver_test.rs"]
mod tests;
