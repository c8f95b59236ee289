// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use annuaire::config::settings::{
    DatabaseSettings, MetricsSettings, PaginationSettings, ServerSettings, Settings,
    TenancySettings,
};
use annuaire::domain::services::category_service::CategoryService;
use annuaire::domain::services::directory_service::DirectoryService;
use annuaire::domain::services::review_service::ReviewService;
use annuaire::domain::services::tenant_resolver::TenantResolver;
use annuaire::infrastructure::database::connection;
use annuaire::infrastructure::database::entities::{
    category, company, company_category, company_content, review, tenant,
};
use annuaire::infrastructure::repositories::category_repo_impl::CategoryRepositoryImpl;
use annuaire::infrastructure::repositories::company_content_repo_impl::CompanyContentRepositoryImpl;
use annuaire::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;
use annuaire::infrastructure::repositories::review_repo_impl::ReviewRepositoryImpl;
use annuaire::infrastructure::repositories::tenant_repo_impl::TenantRepositoryImpl;
use annuaire::presentation::routes::{build_router, AppState};
use axum_test::TestServer;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_HOST: &str = "haguenau.pro";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub companies: Arc<CompanyRepositoryImpl>,
    pub contents: Arc<CompanyContentRepositoryImpl>,
    pub categories: Arc<CategoryRepositoryImpl>,
    pub reviews: Arc<ReviewRepositoryImpl>,
}

/// 创建连接到独立内存数据库的测试应用
///
/// 内存SQLite限定单连接，避免连接池把每个连接映射到
/// 不同的空库。
pub async fn create_test_app() -> TestApp {
    let db = create_test_db().await;

    let settings = Arc::new(Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
            max_lifetime: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        tenancy: TenancySettings {
            default_hostname: DEFAULT_HOST.to_string(),
            cache_capacity: 64,
            cache_ttl: 60,
        },
        pagination: PaginationSettings {
            default_per_page: 20,
            max_per_page: 100,
        },
        metrics: MetricsSettings {
            enabled: false,
            port: 0,
        },
    });

    let tenant_repo = Arc::new(TenantRepositoryImpl::new(db.clone()));
    let company_repo = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    let content_repo = Arc::new(CompanyContentRepositoryImpl::new(db.clone()));
    let category_repo = Arc::new(CategoryRepositoryImpl::new(db.clone()));
    let review_repo = Arc::new(ReviewRepositoryImpl::new(db.clone()));

    let resolver = Arc::new(TenantResolver::new(
        tenant_repo.clone(),
        DEFAULT_HOST,
        settings.tenancy.cache_capacity as usize,
        Duration::from_secs(settings.tenancy.cache_ttl),
    ));
    let directory = Arc::new(DirectoryService::new(
        company_repo.clone(),
        content_repo.clone(),
        category_repo.clone(),
    ));
    let categories = Arc::new(CategoryService::new(
        category_repo.clone(),
        company_repo.clone(),
    ));
    let reviews = Arc::new(ReviewService::new(review_repo.clone(), company_repo.clone()));

    let app = build_router(AppState {
        settings,
        resolver,
        directory,
        categories,
        reviews,
    });

    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db,
        companies: company_repo,
        contents: content_repo,
        categories: category_repo,
        reviews: review_repo,
    }
}

/// 创建迁移完成的内存数据库连接
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
        max_lifetime: None,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to connect to in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn seed_tenant(db: &DatabaseConnection, hostname: &str, is_active: bool) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    tenant::ActiveModel {
        id: Set(id),
        hostname: Set(hostname.to_string()),
        display_name: Set(hostname.to_string()),
        is_active: Set(is_active),
        primary_color: Set(None),
        logo_url: Set(None),
        settings: Set(serde_json::json!({})),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed tenant");
    id
}

pub async fn seed_company(db: &DatabaseConnection, slug: &str, name: &str) -> Uuid {
    seed_company_full(db, slug, name, None, true).await
}

pub async fn seed_company_full(
    db: &DatabaseConnection,
    slug: &str,
    name: &str,
    city: Option<&str>,
    is_active: bool,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    company::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        description: Set(Some(format!("{} base description", name))),
        street_address: Set(None),
        postal_code: Set(None),
        city: Set(city.map(str::to_owned)),
        phone: Set(None),
        email: Set(None),
        website: Set(None),
        images: Set(serde_json::json!([])),
        latitude: Set(None),
        longitude: Set(None),
        rating: Set(None),
        review_count: Set(0),
        is_active: Set(is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed company");
    id
}

pub async fn seed_content(
    db: &DatabaseConnection,
    company_id: Uuid,
    tenant_id: Uuid,
    is_visible: bool,
    description: Option<&str>,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    company_content::ActiveModel {
        id: Set(id),
        company_id: Set(company_id),
        tenant_id: Set(tenant_id),
        is_visible: Set(is_visible),
        description: Set(description.map(str::to_owned)),
        promotions: Set(None),
        images: Set(serde_json::json!([])),
        custom_fields: Set(serde_json::json!({})),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed company content");
    id
}

pub async fn seed_category(db: &DatabaseConnection, slug: &str, parent_id: Option<Uuid>) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    category::ActiveModel {
        id: Set(id),
        slug: Set(slug.to_string()),
        label: Set(slug.to_string()),
        names: Set(serde_json::json!({})),
        parent_id: Set(parent_id),
        icon: Set(None),
        sort_order: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed category");
    id
}

pub async fn tag_company(db: &DatabaseConnection, company_id: Uuid, category_id: Uuid) {
    company_category::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        category_id: Set(category_id),
    }
    .insert(db)
    .await
    .expect("Failed to tag company");
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_review(
    db: &DatabaseConnection,
    company_id: Uuid,
    rating: i32,
    source: &str,
    external_review_id: Option<&str>,
    is_active: bool,
    is_approved: bool,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    review::ActiveModel {
        id: Set(id),
        company_id: Set(company_id),
        author_name: Set("Reviewer".to_string()),
        author_photo_url: Set(None),
        rating: Set(rating),
        comment: Set(None),
        source: Set(source.to_string()),
        external_review_id: Set(external_review_id.map(str::to_owned)),
        review_date: Set(now.into()),
        is_active: Set(is_active),
        is_approved: Set(is_approved),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed review");
    id
}
