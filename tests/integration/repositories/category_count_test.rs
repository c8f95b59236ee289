// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{
    create_test_db, seed_category, seed_company, seed_content, seed_tenant, tag_company,
};
use annuaire::domain::repositories::company_repository::CompanyRepository;
use annuaire::domain::services::category_service::CategoryService;
use annuaire::infrastructure::repositories::category_repo_impl::CategoryRepositoryImpl;
use annuaire::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;
use std::sync::Arc;

/// 主分类计数是自身及子分类下企业的并集，双标企业只计一次
#[tokio::test]
async fn test_main_category_count_unions_children_without_double_counting() {
    let db = create_test_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    let categories = Arc::new(CategoryRepositoryImpl::new(db.clone()));
    let service = CategoryService::new(categories, companies);

    let tenant_id = seed_tenant(&db, "haguenau.pro", true).await;
    let restaurants = seed_category(&db, "restaurants", None).await;
    let pizzeria = seed_category(&db, "pizzeria", Some(restaurants)).await;
    let brasserie = seed_category(&db, "brasserie", Some(restaurants)).await;

    // Tagged on the main category only.
    let a = seed_company(&db, "table-alsacienne", "Table Alsacienne").await;
    tag_company(&db, a, restaurants).await;
    // Tagged on a leaf only.
    let b = seed_company(&db, "roma-pizza", "Roma Pizza").await;
    tag_company(&db, b, pizzeria).await;
    // Tagged on both the main category and a leaf.
    let c = seed_company(&db, "brasserie-gare", "Brasserie de la Gare").await;
    tag_company(&db, c, restaurants).await;
    tag_company(&db, c, brasserie).await;

    for id in [a, b, c] {
        seed_content(&db, id, tenant_id, true, None).await;
    }

    let tenant = annuaire::domain::models::tenant::Tenant {
        id: tenant_id,
        hostname: "haguenau.pro".to_string(),
        display_name: "Haguenau".to_string(),
        is_active: true,
        primary_color: None,
        logo_url: None,
        settings: serde_json::json!({}),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    let main_count = service
        .count_companies_in_category("restaurants", &tenant)
        .await
        .unwrap();
    assert_eq!(main_count, 3);

    let leaf_count = service
        .count_companies_in_category("pizzeria", &tenant)
        .await
        .unwrap();
    assert_eq!(leaf_count, 1);

    // The parent count dominates every child count.
    assert!(main_count >= leaf_count);
}

/// 租户范围计数只数该租户可见的企业，全局计数跨租户
#[tokio::test]
async fn test_scoped_count_respects_visibility_and_global_does_not() {
    let db = create_test_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    let categories = Arc::new(CategoryRepositoryImpl::new(db.clone()));
    let service = CategoryService::new(categories, companies.clone());

    let tenant_a = seed_tenant(&db, "haguenau.pro", true).await;
    let tenant_b = seed_tenant(&db, "brumath.pro", true).await;
    let artisans = seed_category(&db, "artisans", None).await;

    let on_a = seed_company(&db, "menuiserie-bois", "Menuiserie Bois").await;
    let on_b = seed_company(&db, "plomberie-eau", "Plomberie Eau").await;
    let hidden_on_a = seed_company(&db, "serrurerie-cle", "Serrurerie Clé").await;
    for id in [on_a, on_b, hidden_on_a] {
        tag_company(&db, id, artisans).await;
    }
    seed_content(&db, on_a, tenant_a, true, None).await;
    seed_content(&db, on_b, tenant_b, true, None).await;
    seed_content(&db, hidden_on_a, tenant_a, false, None).await;

    let scoped = companies
        .count_visible_in_categories(tenant_a, &["artisans".to_string()])
        .await
        .unwrap();
    assert_eq!(scoped, 1);

    let global = service
        .count_companies_in_category_global("artisans")
        .await
        .unwrap();
    assert_eq!(global, 3);
    assert!(global >= scoped);
}
