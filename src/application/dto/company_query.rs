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

use crate::config::settings::PaginationSettings;
use crate::domain::errors::DomainError;
use crate::domain::models::company::CompanyFilter;
use serde::Deserialize;

/// 企业列表查询数据传输对象
///
/// 所有字段按原始字符串接收，交由领域层校验——格式错误返回400，
/// 绝不静默修正。
#[derive(Debug, Deserialize, Default)]
pub struct CompanyListQueryDto {
    /// 全文搜索词
    pub q: Option<String>,
    /// 分类slug
    pub category: Option<String>,
    /// 城市
    pub city: Option<String>,
    /// 排序键（name | popular）
    pub sort: Option<String>,
    /// 最低评分
    pub min_rating: Option<String>,
    /// 页码（从1开始）
    pub page: Option<u64>,
    /// 每页条目数
    pub per_page: Option<u64>,
}

impl CompanyListQueryDto {
    /// 校验并转换为领域过滤器
    pub fn into_filter(
        self,
        pagination: &PaginationSettings,
    ) -> Result<CompanyFilter, DomainError> {
        CompanyFilter::from_raw(
            self.q,
            self.category,
            self.city,
            self.sort,
            self.min_rating,
            self.page,
            self.per_page,
            pagination.default_per_page,
            pagination.max_per_page,
        )
    }
}
