use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use utopia_core::{FilterMap, Passenger, PassengerFields};

use crate::error::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::fields::{FieldError, FieldMap};
use crate::responses;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/passengers", get(find_all).post(insert).put(update))
        .route("/passengers/health", get(responses::health))
        .route("/passengers/search", post(search))
        .route("/passengers/booking/{booking_id}", get(find_by_booking_id))
        .route("/passengers/passport/{passport_id}", get(find_by_passport_id))
        .route("/passengers/{id}", get(find_by_id).delete(delete))
}

fn passenger_fields(fields: &FieldMap) -> Result<PassengerFields, FieldError> {
    Ok(PassengerFields {
        booking_id: fields.integer("passengerBookingId")?,
        passport_id: fields.text("passengerPassportId")?,
        first_name: fields.text("passengerFirstName")?,
        last_name: fields.text("passengerLastName")?,
        date_of_birth: fields.text("passengerDateOfBirth")?,
        sex: fields.text("passengerSex")?,
        address: fields.text("passengerAddress")?,
        is_veteran: fields.boolean("passengerIsVeteran")?,
    })
}

async fn find_all(State(state): State<AppState>) -> Result<Response, AppError> {
    let passengers = state.passengers.find_all().await?;
    Ok(responses::list(passengers))
}

async fn find_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Passenger>, AppError> {
    Ok(Json(state.passengers.find_by_id(id).await?))
}

async fn find_by_booking_id(
    State(state): State<AppState>,
    ApiPath(booking_id): ApiPath<i32>,
) -> Result<Json<Passenger>, AppError> {
    Ok(Json(state.passengers.find_by_booking_id(booking_id).await?))
}

async fn find_by_passport_id(
    State(state): State<AppState>,
    ApiPath(passport_id): ApiPath<String>,
) -> Result<Json<Passenger>, AppError> {
    Ok(Json(state.passengers.find_by_passport_id(&passport_id).await?))
}

async fn search(
    State(state): State<AppState>,
    ApiJson(filters): ApiJson<FilterMap>,
) -> Result<Response, AppError> {
    let passengers = state.passengers.find_by_search_and_filter(&filters).await?;
    Ok(responses::list(passengers))
}

async fn insert(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let fields = passenger_fields(&FieldMap::new(body))?;
    let passenger = state.passengers.insert(fields).await?;
    Ok((StatusCode::CREATED, Json(passenger)).into_response())
}

async fn update(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let fields = FieldMap::new(body);
    let id = fields.integer("passengerId")?;
    let passenger = state.passengers.update(id, passenger_fields(&fields)?).await?;
    Ok((StatusCode::ACCEPTED, Json(passenger)).into_response())
}

async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Response, AppError> {
    let message = state.passengers.delete(id).await?;
    Ok((StatusCode::ACCEPTED, message).into_response())
}
