use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use tracing::info;
use utopia_core::{FilterMap, Payment};

use crate::error::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::fields::FieldMap;
use crate::responses;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(find_all).post(insert).put(update))
        .route("/payments/health", get(responses::health))
        .route("/payments/search", post(search))
        .route("/payments/booking/{booking_uuid}", get(find_by_booking_uuid))
        .route("/payments/stripe/{stripe_uuid}", get(find_by_stripe_uuid))
        .route("/payments/{id}", get(find_by_id).delete(delete))
}

/// GET /payments
async fn find_all(State(state): State<AppState>) -> Result<Response, AppError> {
    let payments = state.payments.find_all().await?;
    Ok(responses::list(payments))
}

/// GET /payments/{id}
async fn find_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(state.payments.find_by_id(id).await?))
}

async fn find_by_booking_uuid(
    State(state): State<AppState>,
    ApiPath(booking_uuid): ApiPath<String>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(state.payments.find_by_booking_uuid(&booking_uuid).await?))
}

async fn find_by_stripe_uuid(
    State(state): State<AppState>,
    ApiPath(stripe_uuid): ApiPath<String>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(state.payments.find_by_stripe_uuid(&stripe_uuid).await?))
}

/// POST /payments/search
async fn search(
    State(state): State<AppState>,
    ApiJson(filters): ApiJson<FilterMap>,
) -> Result<Response, AppError> {
    let payments = state.payments.find_by_search_and_filter(&filters).await?;
    Ok(responses::list(payments))
}

/// POST /payments
async fn insert(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let fields = FieldMap::new(body);
    let booking_uuid = fields.text("paymentBookingUuid")?;
    let stripe_uuid = fields.text("paymentStripeUuid")?;
    let status = fields.text("paymentStatus")?;

    let payment = state.payments.insert(&booking_uuid, &stripe_uuid, &status).await?;
    Ok((StatusCode::CREATED, Json(payment)).into_response())
}

/// PUT /payments
async fn update(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let fields = FieldMap::new(body);
    let id = fields.integer("paymentId")?;
    let booking_uuid = fields.text("paymentBookingUuid")?;
    let stripe_uuid = fields.text("paymentStripeUuid")?;
    let status = fields.text("paymentStatus")?;

    let payment = state.payments.update(id, &booking_uuid, &stripe_uuid, &status).await?;
    Ok((StatusCode::ACCEPTED, Json(payment)).into_response())
}

/// DELETE /payments/{id}
async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Response, AppError> {
    let message = state.payments.delete(id).await?;
    info!("{}", message);
    Ok((StatusCode::ACCEPTED, message).into_response())
}
