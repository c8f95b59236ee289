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

use annuaire::config::settings::Settings;
use annuaire::domain::services::category_service::CategoryService;
use annuaire::domain::services::directory_service::DirectoryService;
use annuaire::domain::services::review_service::ReviewService;
use annuaire::domain::services::tenant_resolver::TenantResolver;
use annuaire::infrastructure::database::connection;
use annuaire::infrastructure::repositories::category_repo_impl::CategoryRepositoryImpl;
use annuaire::infrastructure::repositories::company_content_repo_impl::CompanyContentRepositoryImpl;
use annuaire::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;
use annuaire::infrastructure::repositories::review_repo_impl::ReviewRepositoryImpl;
use annuaire::infrastructure::repositories::tenant_repo_impl::TenantRepositoryImpl;
use annuaire::presentation::routes::{build_router, AppState};
use annuaire::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting annuaire...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    annuaire::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Repositories
    let tenant_repo = Arc::new(TenantRepositoryImpl::new(db.clone()));
    let company_repo = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    let content_repo = Arc::new(CompanyContentRepositoryImpl::new(db.clone()));
    let category_repo = Arc::new(CategoryRepositoryImpl::new(db.clone()));
    let review_repo = Arc::new(ReviewRepositoryImpl::new(db.clone()));

    // 5. Initialize Services
    let resolver = Arc::new(TenantResolver::new(
        tenant_repo.clone(),
        &settings.tenancy.default_hostname,
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

    // 6. Verify the default tenant before accepting traffic, so a missing
    // fallback tenant fails the deployment instead of every request.
    let default_tenant = resolver.verify_default().await?;
    info!(
        "Default tenant verified: {} ({})",
        default_tenant.display_name, default_tenant.hostname
    );

    // 7. Start HTTP server
    let app = build_router(AppState {
        settings: settings.clone(),
        resolver,
        directory,
        categories,
        reviews,
    })
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
