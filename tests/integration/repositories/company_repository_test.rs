// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{
    create_test_db, seed_company, seed_company_full, seed_content, seed_tenant,
};
use annuaire::domain::models::company::{CompanyFilter, SortKey};
use annuaire::domain::repositories::company_repository::CompanyRepository;
use annuaire::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;

fn default_filter() -> CompanyFilter {
    CompanyFilter {
        page: 1,
        per_page: 20,
        ..Default::default()
    }
}

/// 租户A的列表绝不包含只在租户B上架的企业
#[tokio::test]
async fn test_listing_is_isolated_between_tenants() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant_a = seed_tenant(&db, "haguenau.pro", true).await;
    let tenant_b = seed_tenant(&db, "brumath.pro", true).await;

    let shared = seed_company(&db, "boulangerie-schmitt", "Boulangerie Schmitt").await;
    let only_b = seed_company(&db, "garage-muller", "Garage Muller").await;

    seed_content(&db, shared, tenant_a, true, None).await;
    seed_content(&db, shared, tenant_b, true, None).await;
    seed_content(&db, only_b, tenant_b, true, None).await;

    let page_a = repo.list_visible(tenant_a, &default_filter()).await.unwrap();
    assert_eq!(page_a.total, 1);
    assert_eq!(page_a.items[0].0.slug, "boulangerie-schmitt");

    let page_b = repo.list_visible(tenant_b, &default_filter()).await.unwrap();
    assert_eq!(page_b.total, 2);
}

/// is_visible=false 的上架记录把企业从该租户隐藏，其他租户不受影响
#[tokio::test]
async fn test_hidden_listing_only_affects_its_tenant() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant_a = seed_tenant(&db, "haguenau.pro", true).await;
    let tenant_b = seed_tenant(&db, "brumath.pro", true).await;

    let company = seed_company(&db, "fleuriste-rose", "Fleuriste Rose").await;
    seed_content(&db, company, tenant_a, false, None).await;
    seed_content(&db, company, tenant_b, true, None).await;

    let page_a = repo.list_visible(tenant_a, &default_filter()).await.unwrap();
    assert_eq!(page_a.total, 0);

    let found_a = repo
        .find_visible_by_slug(tenant_a, "fleuriste-rose")
        .await
        .unwrap();
    assert!(found_a.is_none());

    let found_b = repo
        .find_visible_by_slug(tenant_b, "fleuriste-rose")
        .await
        .unwrap();
    assert!(found_b.is_some());
}

/// 企业级停用是硬覆盖：上架记录可见也不返回
#[tokio::test]
async fn test_inactive_company_never_visible() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant = seed_tenant(&db, "haguenau.pro", true).await;
    let company = seed_company_full(&db, "ferme-bio", "Ferme Bio", None, false).await;
    seed_content(&db, company, tenant, true, None).await;

    let page = repo.list_visible(tenant, &default_filter()).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(repo
        .find_visible_by_slug(tenant, "ferme-bio")
        .await
        .unwrap()
        .is_none());

    // The admin path still sees it, visibility gating is tenant-read only.
    assert!(repo.find_by_slug("ferme-bio").await.unwrap().is_some());
}

/// slug只在其他租户可见与全局不存在都返回None，不可区分
#[tokio::test]
async fn test_cross_tenant_slug_indistinguishable_from_missing() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant_a = seed_tenant(&db, "haguenau.pro", true).await;
    let tenant_b = seed_tenant(&db, "brumath.pro", true).await;

    let company = seed_company(&db, "tabac-presse", "Tabac Presse").await;
    seed_content(&db, company, tenant_b, true, None).await;

    let elsewhere = repo.find_visible_by_slug(tenant_a, "tabac-presse").await.unwrap();
    let missing = repo.find_visible_by_slug(tenant_a, "no-such-slug").await.unwrap();
    assert!(elsewhere.is_none());
    assert!(missing.is_none());
}

/// 搜索与城市过滤不区分大小写，只作用于租户可见子集
#[tokio::test]
async fn test_search_and_city_filters() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant = seed_tenant(&db, "haguenau.pro", true).await;
    let a = seed_company_full(&db, "pizzeria-roma", "Pizzeria Roma", Some("Haguenau"), true).await;
    let b = seed_company_full(&db, "cafe-central", "Café Central", Some("Brumath"), true).await;
    seed_content(&db, a, tenant, true, None).await;
    seed_content(&db, b, tenant, true, None).await;

    let mut filter = default_filter();
    filter.search = Some("PIZZERIA".to_string());
    let page = repo.list_visible(tenant, &filter).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].0.slug, "pizzeria-roma");

    let mut filter = default_filter();
    filter.city = Some("haguenau".to_string());
    let page = repo.list_visible(tenant, &filter).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].0.slug, "pizzeria-roma");
}

/// popular排序：评分降序，无评分的企业排在最后
#[tokio::test]
async fn test_popular_sort_puts_unrated_last() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant = seed_tenant(&db, "haguenau.pro", true).await;
    let unrated = seed_company(&db, "atelier-neuf", "Atelier Neuf").await;
    let low = seed_company(&db, "bar-du-coin", "Bar du Coin").await;
    let high = seed_company(&db, "restaurant-etoile", "Restaurant Étoile").await;
    for id in [unrated, low, high] {
        seed_content(&db, id, tenant, true, None).await;
    }
    repo.update_rating(low, Some(3.2), 5).await.unwrap();
    repo.update_rating(high, Some(4.8), 12).await.unwrap();

    let mut filter = default_filter();
    filter.sort = SortKey::Popular;
    let page = repo.list_visible(tenant, &filter).await.unwrap();

    let slugs: Vec<&str> = page.items.iter().map(|(c, _)| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["restaurant-etoile", "bar-du-coin", "atelier-neuf"]);
}

/// 分页在过滤后的总数上切片
#[tokio::test]
async fn test_pagination_slices_filtered_total() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant = seed_tenant(&db, "haguenau.pro", true).await;
    for i in 0..5 {
        let id = seed_company(&db, &format!("shop-{}", i), &format!("Shop {}", i)).await;
        seed_content(&db, id, tenant, true, None).await;
    }

    let mut filter = default_filter();
    filter.per_page = 2;
    filter.page = 3;
    let page = repo.list_visible(tenant, &filter).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].0.slug, "shop-4");
}

/// 超大页码不会在偏移量计算上溢出，只会得到一个空页
#[tokio::test]
async fn test_huge_page_number_yields_empty_page() {
    let db = create_test_db().await;
    let repo = CompanyRepositoryImpl::new(db.clone());

    let tenant = seed_tenant(&db, "haguenau.pro", true).await;
    let company = seed_company(&db, "librairie-centrale", "Librairie Centrale").await;
    seed_content(&db, company, tenant, true, None).await;

    let mut filter = default_filter();
    filter.per_page = 100;
    filter.page = u64::MAX;
    let page = repo.list_visible(tenant, &filter).await.unwrap();
    assert_eq!(page.total, 1);
    assert!(page.items.is_empty());
}
