// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{
    create_test_app, seed_company, seed_content, seed_tenant, DEFAULT_HOST,
};
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{json, Value};

/// 手工提交的评论待审核：不出现在公开列表，不触碰评分聚合
#[tokio::test]
async fn test_manual_submission_is_pending() {
    let app = create_test_app().await;
    let tenant = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let company = seed_company(&app.db, "librairie-page", "Librairie Page").await;
    seed_content(&app.db, company, tenant, true, None).await;

    let response = app
        .server
        .post("/v1/companies/librairie-page/reviews")
        .add_header("Host", DEFAULT_HOST)
        .json(&json!({
            "author_name": "Claire",
            "rating": 5,
            "comment": "Un très bon accueil"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["is_approved"], false);

    let listed: Value = app
        .server
        .get("/v1/companies/librairie-page/reviews")
        .add_header("Host", DEFAULT_HOST)
        .await
        .json();
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let detail: Value = app
        .server
        .get("/v1/companies/librairie-page")
        .add_header("Host", DEFAULT_HOST)
        .await
        .json();
    assert!(detail["rating"].is_null());
    assert_eq!(detail["review_count"], 0);
}

/// 审核通过后评论公开，评分聚合重算
#[tokio::test]
async fn test_approval_publishes_and_recomputes() {
    let app = create_test_app().await;
    let tenant = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let company = seed_company(&app.db, "pharmacie-croix", "Pharmacie Croix").await;
    seed_content(&app.db, company, tenant, true, None).await;

    let created: Value = app
        .server
        .post("/v1/companies/pharmacie-croix/reviews")
        .add_header("Host", DEFAULT_HOST)
        .json(&json!({ "author_name": "Marc", "rating": 4 }))
        .await
        .json();
    let review_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .post(&format!("/v1/reviews/{}/approve", review_id))
        .add_header("Host", DEFAULT_HOST)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let summary: Value = response.json();
    assert_eq!(summary["rating"], 4.0);
    assert_eq!(summary["review_count"], 1);

    let listed: Value = app
        .server
        .get("/v1/companies/pharmacie-croix/reviews")
        .add_header("Host", DEFAULT_HOST)
        .await
        .json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

/// 评分超出[1,5]返回400
#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let app = create_test_app().await;
    let tenant = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let company = seed_company(&app.db, "opticien-vue", "Opticien Vue").await;
    seed_content(&app.db, company, tenant, true, None).await;

    for rating in [0, 6, -1] {
        let response = app
            .server
            .post("/v1/companies/opticien-vue/reviews")
            .add_header("Host", DEFAULT_HOST)
            .json(&json!({ "author_name": "X", "rating": rating }))
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "rating: {}",
            rating
        );
    }
}

/// 外部同步幂等：重复投递同一批次不产生重复行，聚合收敛到同一值
#[tokio::test]
async fn test_external_sync_is_idempotent() {
    let app = create_test_app().await;
    let tenant = seed_tenant(&app.db, DEFAULT_HOST, true).await;
    let company = seed_company(&app.db, "boucherie-klein", "Boucherie Klein").await;
    seed_content(&app.db, company, tenant, true, None).await;

    let batch = json!({
        "company_slug": "boucherie-klein",
        "source": "google",
        "reviews": [
            {
                "external_review_id": "g1",
                "author_name": "Anna",
                "rating": 5,
                "review_date": Utc::now()
            },
            {
                "external_review_id": "g2",
                "author_name": "Paul",
                "rating": 4,
                "review_date": Utc::now()
            }
        ]
    });

    let first: Value = app
        .server
        .post("/v1/reviews/sync")
        .add_header("Host", DEFAULT_HOST)
        .json(&batch)
        .await
        .json();
    assert_eq!(first["created"], 2);
    assert_eq!(first["updated"], 0);
    assert_eq!(first["rating"], 4.5);
    assert_eq!(first["review_count"], 2);

    let second: Value = app
        .server
        .post("/v1/reviews/sync")
        .add_header("Host", DEFAULT_HOST)
        .json(&batch)
        .await
        .json();
    assert_eq!(second["created"], 0);
    assert_eq!(second["updated"], 2);
    assert_eq!(second["rating"], 4.5);
    assert_eq!(second["review_count"], 2);
}

/// 同步目标企业不存在返回404，未知来源返回400
#[tokio::test]
async fn test_sync_validation() {
    let app = create_test_app().await;
    seed_tenant(&app.db, DEFAULT_HOST, true).await;

    let response = app
        .server
        .post("/v1/reviews/sync")
        .add_header("Host", DEFAULT_HOST)
        .json(&json!({
            "company_slug": "no-such-company",
            "source": "google",
            "reviews": []
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .post("/v1/reviews/sync")
        .add_header("Host", DEFAULT_HOST)
        .json(&json!({
            "company_slug": "no-such-company",
            "source": "yelp",
            "reviews": []
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
