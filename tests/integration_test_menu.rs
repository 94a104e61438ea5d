mod common;

use axum::http::StatusCode;
use common::TestApp;
use restaurant_backend::domain::policy::MenuWritePolicy;
use serde_json::json;

#[tokio::test]
async fn test_menu_list_is_public_and_complete() {
    let app = TestApp::new().await;
    let (token, _) = app.register("chef", "kitchenpass").await;

    for title in ["Burger", "Pizza", "Salad"] {
        let (status, _) = app
            .request(
                "POST",
                "/api/menu/",
                Some(&token),
                Some(json!({ "title": title, "price": "9.99", "inventory": 10 })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // No credentials at all.
    let (status, body) = app.request("GET", "/api/menu/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_menu_item_round_trip() {
    let app = TestApp::new().await;
    let (token, _) = app.register("chef", "kitchenpass").await;

    let (status, created) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Burger", "price": "9.99", "inventory": 50 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = app
        .request("GET", &format!("/api/menu/{id}/"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Burger");
    assert_eq!(fetched["price"], "9.99");
    assert_eq!(fetched["inventory"], 50);
    assert_eq!(fetched["id"], id);
}

#[tokio::test]
async fn test_menu_write_requires_authentication() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            None,
            Some(json!({ "title": "Salad", "price": "8.99", "inventory": 40 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Garbage token is a guest, not an authenticated caller.
    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some("not-a-real-token"),
            Some(json!({ "title": "Salad", "price": "8.99", "inventory": 40 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_menu_update_and_delete() {
    let app = TestApp::new().await;
    let (token, _) = app.register("chef", "kitchenpass").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Burger", "price": "9.99", "inventory": 50 })),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = app
        .request(
            "PUT",
            &format!("/api/menu/{id}/"),
            Some(&token),
            Some(json!({ "title": "Burger Deluxe", "price": "10.99", "inventory": 45 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Burger Deluxe");
    assert_eq!(updated["price"], "10.99");

    let (status, _) = app
        .request("DELETE", &format!("/api/menu/{id}/"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request("GET", &format!("/api/menu/{id}/"), None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_rejects_invalid_payloads() {
    let app = TestApp::new().await;
    let (token, _) = app.register("chef", "kitchenpass").await;

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "", "price": "9.99" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Soup", "price": "-1.00" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Soup", "price": "4.50", "inventory": -3 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_menu_inventory_defaults_to_zero() {
    let app = TestApp::new().await;
    let (token, _) = app.register("chef", "kitchenpass").await;

    let (status, created) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Special", "price": "15.00" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["inventory"], 0);
}

#[tokio::test]
async fn test_staff_policy_rejects_plain_members_with_403() {
    let app = TestApp::with_menu_policy(MenuWritePolicy::StaffWrite).await;
    let (token, user_id) = app.register("regular", "memberpass").await;

    // Reads stay open.
    let (status, _) = app.request("GET", "/api/menu/", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Pasta", "price": "11.99", "inventory": 20 })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Promote to staff and retry.
    sqlx::query("UPDATE users SET is_staff = 1 WHERE id = ?")
        .bind(user_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            Some(&token),
            Some(json!({ "title": "Pasta", "price": "11.99", "inventory": 20 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Anonymous writers still get 401, not 403.
    let (status, _) = app
        .request(
            "POST",
            "/api/menu/",
            None,
            Some(json!({ "title": "Pasta", "price": "11.99" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
