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

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_tenants;
mod m20250801_000002_create_companies;
mod m20250801_000003_create_categories;
mod m20250801_000004_create_company_contents;
mod m20250801_000005_create_reviews;
mod m20250812_000006_create_indexes;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_tenants::Migration),
            Box::new(m20250801_000002_create_companies::Migration),
            Box::new(m20250801_000003_create_categories::Migration),
            Box::new(m20250801_000004_create_company_contents::Migration),
            Box::new(m20250801_000005_create_reviews::Migration),
            Box::new(m20250812_000006_create_indexes::Migration),
        ]
    }
}
