mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;
use utopia_core::fixtures;

#[tokio::test]
async fn test_health() {
    let response = get(&empty_app(), "/payments/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "\"status\": \"up\"");
}

#[tokio::test]
async fn test_find_all() {
    let response = get(&seeded_app(), "/payments").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::to_string(&fixtures::payments()).unwrap());

    let response = get(&empty_app(), "/payments").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, "");
}

#[tokio::test]
async fn test_find_by_id() {
    let app = seeded_app();

    let response = get(&app, "/payments/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::to_string(&fixtures::payment()).unwrap());

    assert_eq!(get(&app, "/payments/-1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/payments/NotAnInteger").await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_by_natural_keys() {
    let app = seeded_app();
    let payment = fixtures::payment();

    let response = get(&app, &format!("/payments/booking/{}", payment.payment_booking_uuid)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["paymentId"], 1);

    let response = get(&app, &format!("/payments/stripe/{}", payment.payment_stripe_uuid)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["paymentId"], 1);

    assert_eq!(get(&app, "/payments/booking/NotAValidUuid").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/payments/stripe/NotAValidUuid").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search() {
    let app = seeded_app();

    let response = post_json(&app, "/payments/search", json!({"searchTerms": ""})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::to_string(&fixtures::payments()).unwrap());

    let response = post_json(&app, "/payments/search", json!({"searchTerms": "REJECTED"})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().as_array().unwrap().len(), 1);

    let response = post_json(&app, "/payments/search", json!({"paymentId": "-1"})).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, "");
}

#[tokio::test]
async fn test_search_with_malformed_body() {
    let app = seeded_app();

    let response = send(&app, Method::POST, "/payments/search", Some("NotAJSONObject".to_string())).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());

    let response = post_json(&app, "/payments/search", json!({"paymentId": 1})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insert() {
    let app = seeded_app();
    let body = json!({
        "paymentBookingUuid": "NewBookingUuid",
        "paymentStripeUuid": "NewStripeUuid",
        "paymentStatus": "PENDING",
    });

    let response = post_json(&app, "/payments", body.clone()).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["paymentId"], 10);
    assert_eq!(created["paymentStatus"], "PENDING");

    // Same stripe uuid again
    let response = post_json(&app, "/payments", body).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_insert_rejections() {
    let app = seeded_app();
    let payment = fixtures::payment();

    let response = post_json(
        &app,
        "/payments",
        json!({
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": payment.payment_stripe_uuid,
            "paymentStatus": "PENDING",
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = post_json(
        &app,
        "/payments",
        json!({
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": "NewStripeUuid",
            "paymentStatus": "NotAStatus",
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = post_json(&app, "/payments", json!({"paymentBookingUuid": "NewBookingUuid"})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert_eq!(get(&app, "/payments").await.json().as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_update() {
    let app = seeded_app();

    let response = put_json(
        &app,
        "/payments",
        json!({
            "paymentId": "1",
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": "NewStripeUuid",
            "paymentStatus": "REJECTED",
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(
        response.json(),
        json!({
            "paymentId": 1,
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": "NewStripeUuid",
            "paymentStatus": "REJECTED",
        })
    );

    let response = put_json(
        &app,
        "/payments",
        json!({
            "paymentId": "1",
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": fixtures::payments()[2].payment_stripe_uuid,
            "paymentStatus": "PENDING",
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_missing_payment() {
    let response = put_json(
        &empty_app(),
        "/payments",
        json!({
            "paymentId": "1",
            "paymentBookingUuid": "NewBookingUuid",
            "paymentStripeUuid": "NewStripeUuid",
            "paymentStatus": "PENDING",
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete() {
    let app = seeded_app();

    let response = delete(&app, "/payments/1").await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body, "Payment with ID: 1 was deleted.");

    assert_eq!(delete(&app, "/payments/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/payments/NotAnInteger").await.status, StatusCode::BAD_REQUEST);
}
