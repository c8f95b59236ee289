// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::tenant::Tenant;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// 缓存条目
struct CachedTenant {
    tenant: Tenant,
    inserted_at: Instant,
}

/// 租户缓存
///
/// 按主机名键控的TTL LRU缓存。租户注册表读多写少且由平台集中管理，
/// 短TTL足以吸收每请求一次的注册表查询；正确性不依赖缓存，
/// 过期或未命中时总是回源数据库。
pub struct TenantCache {
    inner: Mutex<LruCache<String, CachedTenant>>,
    ttl: Duration,
}

impl TenantCache {
    /// 创建新的租户缓存
    ///
    /// # 参数
    ///
    /// * `capacity` - 最大条目数（至少为1）
    /// * `ttl` - 条目存活时间
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// 查找未过期的缓存条目
    pub fn get(&self, hostname: &str) -> Option<Tenant> {
        let mut cache = self.inner.lock();
        match cache.get(hostname) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.tenant.clone()),
            Some(_) => {
                cache.pop(hostname);
                None
            }
            None => None,
        }
    }

    /// 写入缓存条目
    pub fn insert(&self, tenant: Tenant) {
        let mut cache = self.inner.lock();
        cache.put(
            tenant.hostname.clone(),
            CachedTenant {
                tenant,
                inserted_at: Instant::now(),
            },
        );
    }

    /// 清空缓存
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
