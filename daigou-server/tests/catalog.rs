//! 商品/分类目录集成测试：排序、合并更新、上架过滤、分类孤儿

mod common;

use http::StatusCode;
use rust_decimal::Decimal;

use common::{login_root, read_json, send_json, test_app, test_state};
use daigou_server::db::repository::{CategoryRepository, ProductRepository, RepoError};
use shared::client::{ProductCreate, ProductUpdate};
use shared::models::ProductStatus;

fn product_create(title: &str, price: i64) -> ProductCreate {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "price": price,
    }))
    .expect("valid payload")
}

#[tokio::test]
async fn sort_order_continues_from_current_max() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());

    let first = repo.create(product_create("商品A", 100)).await.expect("create");
    assert_eq!(first.sort_order, 0);

    let second = repo.create(product_create("商品B", 200)).await.expect("create");
    assert_eq!(second.sort_order, 1);
}

#[tokio::test]
async fn create_applies_catalog_defaults() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());

    let product = repo.create(product_create("商品A", 100)).await.expect("create");
    assert!(product.id.starts_with('p'));
    assert_eq!(product.category, "未分類");
    assert_eq!(product.service_fee, Decimal::ZERO);
    assert_eq!(product.stock, 0);
    assert_eq!(product.status, ProductStatus::Published);
    assert!(product.tags.is_empty());
    assert!(product.image_urls.is_empty());
}

#[tokio::test]
async fn reorder_assigns_positional_indexes_and_ignores_unknown_ids() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());

    let a = repo.create(product_create("A", 1)).await.expect("create");
    let b = repo.create(product_create("B", 2)).await.expect("create");
    let c = repo.create(product_create("C", 3)).await.expect("create");

    // 反转顺序，并塞一个不存在的 id
    repo.reorder(&[
        c.id.clone(),
        "p_missing".to_string(),
        b.id.clone(),
        a.id.clone(),
    ])
    .await
    .expect("reorder");

    let listed = repo.find_all().await.expect("list");
    let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![c.id.as_str(), b.id.as_str(), a.id.as_str()]);
    assert_eq!(listed[0].sort_order, 0);
    assert_eq!(listed[1].sort_order, 2);
    assert_eq!(listed[2].sort_order, 3);
}

#[tokio::test]
async fn unlisted_products_keep_their_sort_order() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());

    let a = repo.create(product_create("A", 1)).await.expect("create");
    let b = repo.create(product_create("B", 2)).await.expect("create");

    // 只重排 b；a 保留原 sort_order
    repo.reorder(&[b.id.clone()]).await.expect("reorder");

    let listed = repo.find_all().await.expect("list");
    let b_row = listed.iter().find(|p| p.id == b.id).expect("b present");
    let a_row = listed.iter().find(|p| p.id == a.id).expect("a present");
    assert_eq!(b_row.sort_order, 0);
    assert_eq!(a_row.sort_order, 0);
}

#[tokio::test]
async fn storefront_sees_only_published_products() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());

    repo.create(product_create("上架商品", 100)).await.expect("create");
    let draft_payload: ProductCreate = serde_json::from_value(serde_json::json!({
        "title": "草稿商品",
        "price": 50,
        "status": "draft",
    }))
    .expect("valid payload");
    repo.create(draft_payload).await.expect("create");

    let published = repo.find_published().await.expect("published");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "上架商品");

    let all = repo.find_all().await.expect("all");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_is_a_merge_patch() {
    let state = test_state().await;
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(product_create("原標題", 100)).await.expect("create");

    let patch = ProductUpdate {
        title: Some("新標題".to_string()),
        ..Default::default()
    };
    let updated = repo.update(&product.id, patch).await.expect("update");

    assert_eq!(updated.title, "新標題");
    assert_eq!(updated.price, Decimal::from(100));
    assert_eq!(updated.sort_order, product.sort_order);

    let err = repo
        .update("p_missing", ProductUpdate::default())
        .await
        .expect_err("unknown id");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let state = test_state().await;
    let repo = CategoryRepository::new(state.db.clone());

    repo.create("美妝".to_string()).await.expect("create");
    let err = repo
        .create("美妝".to_string())
        .await
        .expect_err("duplicate name");
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn deleting_a_category_leaves_product_labels_orphaned() {
    let state = test_state().await;
    let categories = CategoryRepository::new(state.db.clone());
    let products = ProductRepository::new(state.db.clone());

    let category = categories.create("美妝".to_string()).await.expect("create");
    let payload: ProductCreate = serde_json::from_value(serde_json::json!({
        "title": "口紅",
        "price": 300,
        "category": "美妝",
    }))
    .expect("valid payload");
    products.create(payload).await.expect("create");

    categories.delete(&category.id).await.expect("delete");

    // 商品保留已成孤儿的分类文字
    let listed = products.find_all().await.expect("list");
    assert_eq!(listed[0].category, "美妝");
    assert!(categories.find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn product_creation_requires_title_and_price() {
    let (_state, app) = test_app().await;
    let token = login_root(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/products",
        Some(&token),
        Some(serde_json::json!({ "title": "沒有價格" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "商品標題和價格為必填項");
}

#[tokio::test]
async fn duplicate_category_over_http_returns_conflict() {
    let (_state, app) = test_app().await;
    let token = login_root(&app).await;

    let payload = serde_json::json!({ "name": "3C" });
    let response = send_json(&app, "POST", "/api/categories", Some(&token), Some(payload.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(&app, "POST", "/api/categories", Some(&token), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
