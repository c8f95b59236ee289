// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_db, seed_company, seed_review};
use annuaire::domain::models::review::{Review, ReviewSource};
use annuaire::domain::repositories::review_repository::ReviewRepository;
use annuaire::infrastructure::repositories::review_repo_impl::ReviewRepositoryImpl;
use chrono::Utc;
use uuid::Uuid;

fn external_review(company_id: Uuid, external_id: &str, rating: i32) -> Review {
    let now = Utc::now();
    Review {
        id: Uuid::new_v4(),
        company_id,
        author_name: "Jean".to_string(),
        author_photo_url: None,
        rating,
        comment: Some("Très bien".to_string()),
        source: ReviewSource::Google,
        external_review_id: Some(external_id.to_string()),
        review_date: now,
        is_active: true,
        is_approved: true,
        created_at: now,
        updated_at: now,
    }
}

/// 公开评论只包含激活且已审核的，按评论日期降序
#[tokio::test]
async fn test_list_public_filters_pending_and_inactive() {
    let db = create_test_db().await;
    let repo = ReviewRepositoryImpl::new(db.clone());
    let company = seed_company(&db, "librairie-page", "Librairie Page").await;

    seed_review(&db, company, 5, "manual", None, true, true).await;
    seed_review(&db, company, 1, "manual", None, true, false).await;
    seed_review(&db, company, 2, "google", Some("g-old"), false, true).await;

    let public = repo.list_public_by_company(company).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].rating, 5);
}

/// 同一同步键的重复投递更新原行，不产生重复
#[tokio::test]
async fn test_upsert_external_is_idempotent() {
    let db = create_test_db().await;
    let repo = ReviewRepositoryImpl::new(db.clone());
    let company = seed_company(&db, "boucherie-klein", "Boucherie Klein").await;

    let first = external_review(company, "g1", 3);
    assert!(repo.upsert_external(&first).await.unwrap());

    let mut redelivered = external_review(company, "g1", 5);
    redelivered.comment = Some("Excellent".to_string());
    assert!(!repo.upsert_external(&redelivered).await.unwrap());

    let public = repo.list_public_by_company(company).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].rating, 5);
    assert_eq!(public[0].comment.as_deref(), Some("Excellent"));
    // The row keeps its original identity across redeliveries.
    assert_eq!(public[0].id, first.id);
}

/// 不同来源的相同外部ID是不同的同步键
#[tokio::test]
async fn test_sync_key_includes_source() {
    let db = create_test_db().await;
    let repo = ReviewRepositoryImpl::new(db.clone());
    let company = seed_company(&db, "opticien-vue", "Opticien Vue").await;

    let google = external_review(company, "42", 4);
    let mut manual = external_review(company, "42", 2);
    manual.source = ReviewSource::Manual;

    assert!(repo.upsert_external(&google).await.unwrap());
    assert!(repo.upsert_external(&manual).await.unwrap());

    let public = repo.list_public_by_company(company).await.unwrap();
    assert_eq!(public.len(), 2);
}

/// 审核标记只翻转is_approved
#[tokio::test]
async fn test_mark_approved() {
    let db = create_test_db().await;
    let repo = ReviewRepositoryImpl::new(db.clone());
    let company = seed_company(&db, "pharmacie-croix", "Pharmacie Croix").await;

    let id = seed_review(&db, company, 4, "manual", None, true, false).await;
    assert!(repo.list_public_by_company(company).await.unwrap().is_empty());

    repo.mark_approved(id).await.unwrap();

    let public = repo.list_public_by_company(company).await.unwrap();
    assert_eq!(public.len(), 1);
    assert!(public[0].is_approved);
}
