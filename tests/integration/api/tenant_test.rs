// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_tenant, DEFAULT_HOST};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_check_needs_no_tenant() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_version_endpoint() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

/// Host头精确匹配返回对应租户，响应不暴露内部ID
#[tokio::test]
async fn test_tenant_resolved_from_host_header() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;
    seed_tenant(&app.db, "brumath.pro", true).await;

    let response = app
        .server
        .get("/v1/tenant")
        .add_header("Host", "brumath.pro")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["hostname"], "brumath.pro");
    assert!(body.get("id").is_none());
    assert!(body.get("is_active").is_none());
}

/// www前缀与端口不影响解析结果
#[tokio::test]
async fn test_host_normalization_is_transparent() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;
    seed_tenant(&app.db, "brumath.pro", true).await;

    for host in ["www.brumath.pro", "brumath.pro:8080", "WWW.Brumath.PRO:443"] {
        let response = app.server.get("/v1/tenant").add_header("Host", host).await;
        let body: Value = response.json();
        assert_eq!(body["hostname"], "brumath.pro", "host variant: {}", host);
    }
}

/// 未注册的Host回退到默认租户，而不是报错
#[tokio::test]
async fn test_unknown_host_falls_back_to_default() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;

    let response = app
        .server
        .get("/v1/tenant")
        .add_header("Host", "unknown.example")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["hostname"], DEFAULT_HOST);
}

/// 停用租户的Host与未注册的Host同样回退
#[tokio::test]
async fn test_inactive_tenant_host_falls_back() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;
    seed_tenant(&app.db, "ferme.pro", false).await;

    let response = app
        .server
        .get("/v1/tenant")
        .add_header("Host", "ferme.pro")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["hostname"], DEFAULT_HOST);
}

/// 默认租户缺失时租户路由全部失败（部署错误，而不是静默空结果）
#[tokio::test]
async fn test_missing_default_tenant_is_an_error() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/v1/tenant")
        .add_header("Host", "unknown.example")
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
