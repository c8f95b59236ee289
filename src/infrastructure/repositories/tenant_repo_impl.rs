// Copyright 2025 Annuaire
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::tenant::Tenant;
use crate::domain::repositories::tenant_repository::{RepositoryError, TenantRepository};
use crate::infrastructure::database::entities::tenant as tenant_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 租户仓库实现
pub struct TenantRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TenantRepositoryImpl {
    /// 创建新的租户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantRepository for TenantRepositoryImpl {
    async fn find_by_hostname(&self, hostname: &str) -> Result<Option<Tenant>, RepositoryError> {
        let model = tenant_entity::Entity::find()
            .filter(tenant_entity::Column::Hostname.eq(hostname))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }
}

fn to_domain(m: tenant_entity::Model) -> Tenant {
    Tenant {
        id: m.id,
        hostname: m.hostname,
        display_name: m.display_name,
        is_active: m.is_active,
        primary_color: m.primary_color,
        logo_url: m.logo_url,
        settings: m.settings,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}
