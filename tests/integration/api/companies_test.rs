// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{
    create_test_app, seed_company, seed_content, seed_tenant, DEFAULT_HOST,
};
use annuaire::domain::repositories::company_repository::CompanyRepository;
use axum::http::StatusCode;
use serde_json::Value;

/// 列表只包含按Host解析出的租户上架的企业
#[tokio::test]
async fn test_listing_is_scoped_by_host_header() {
    let app = create_test_app().await;
    let tenant_a = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let tenant_b = seed_tenant(&app.db, "brumath.pro", true).await;

    let shared = seed_company(&app.db, "boulangerie-schmitt", "Boulangerie Schmitt").await;
    let only_b = seed_company(&app.db, "garage-muller", "Garage Muller").await;
    seed_content(&app.db, shared, tenant_a, true, None).await;
    seed_content(&app.db, shared, tenant_b, true, None).await;
    seed_content(&app.db, only_b, tenant_b, true, None).await;

    let response = app
        .server
        .get("/v1/companies")
        .add_header("Host", DEFAULT_HOST)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["slug"], "boulangerie-schmitt");

    let response = app
        .server
        .get("/v1/companies")
        .add_header("Host", "brumath.pro")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 2);
}

/// 详情视图按租户合并内容覆盖
#[tokio::test]
async fn test_detail_merges_tenant_override() {
    let app = create_test_app().await;
    let tenant_a = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let tenant_b = seed_tenant(&app.db, "brumath.pro", true).await;

    let company = seed_company(&app.db, "fleuriste-rose", "Fleuriste Rose").await;
    seed_content(&app.db, company, tenant_a, true, Some("Spécial Haguenau")).await;
    seed_content(&app.db, company, tenant_b, true, None).await;

    let response = app
        .server
        .get("/v1/companies/fleuriste-rose")
        .add_header("Host", DEFAULT_HOST)
        .await;
    let body: Value = response.json();
    assert_eq!(body["description"], "Spécial Haguenau");

    // No override on the other tenant, the base description shows through.
    let response = app
        .server
        .get("/v1/companies/fleuriste-rose")
        .add_header("Host", "brumath.pro")
        .await;
    let body: Value = response.json();
    assert_eq!(body["description"], "Fleuriste Rose base description");
}

/// 仅在其他租户可见的slug与不存在的slug返回相同的404响应
#[tokio::test]
async fn test_not_found_shape_is_identical() {
    let app = create_test_app().await;
    let _tenant_a = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let tenant_b = seed_tenant(&app.db, "brumath.pro", true).await;

    let company = seed_company(&app.db, "tabac-presse", "Tabac Presse").await;
    seed_content(&app.db, company, tenant_b, true, None).await;

    let elsewhere = app
        .server
        .get("/v1/companies/tabac-presse")
        .add_header("Host", DEFAULT_HOST)
        .await;
    let missing = app
        .server
        .get("/v1/companies/no-such-slug")
        .add_header("Host", DEFAULT_HOST)
        .await;

    assert_eq!(elsewhere.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(elsewhere.json::<Value>(), missing.json::<Value>());
}

/// 格式错误的过滤器参数返回400，绝不静默修正
#[tokio::test]
async fn test_malformed_filters_are_rejected() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;

    for query in [
        "sort=rating",
        "min_rating=abc",
        "min_rating=9",
        "page=0",
        "page=18446744073709551615",
        "per_page=0",
        "per_page=500",
    ] {
        let response = app
            .server
            .get(&format!("/v1/companies?{}", query))
            .add_header("Host", DEFAULT_HOST)
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "query: {}",
            query
        );
    }
}

/// 评分在DTO层舍入到一位小数；无评论时字段为null而不是0
#[tokio::test]
async fn test_rating_rounding_and_null() {
    let app = create_test_app().await;
    let tenant = seed_tenant(&app.db, DEFAULT_HOST, true).await;

    let rated = seed_company(&app.db, "restaurant-etoile", "Restaurant Étoile").await;
    let unrated = seed_company(&app.db, "atelier-neuf", "Atelier Neuf").await;
    seed_content(&app.db, rated, tenant, true, None).await;
    seed_content(&app.db, unrated, tenant, true, None).await;
    app.companies
        .update_rating(rated, Some(13.0 / 3.0), 3)
        .await
        .unwrap();

    let response = app
        .server
        .get("/v1/companies/restaurant-etoile")
        .add_header("Host", DEFAULT_HOST)
        .await;
    let body: Value = response.json();
    assert_eq!(body["rating"], 4.3);
    assert_eq!(body["review_count"], 3);

    let response = app
        .server
        .get("/v1/companies/atelier-neuf")
        .add_header("Host", DEFAULT_HOST)
        .await;
    let body: Value = response.json();
    assert!(body["rating"].is_null());
    assert_eq!(body["review_count"], 0);
}
