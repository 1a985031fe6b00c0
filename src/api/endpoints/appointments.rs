//! Appointment endpoints.
//!
//! - `POST /api/appointments` — book a new appointment
//! - `GET /api/appointments` — list all appointments, earliest first
//! - `GET /api/appointments/:id` — fetch one appointment
//! - `PUT /api/appointments/:id` — overwrite an appointment
//! - `DELETE /api/appointments/:id` — cancel an appointment
//!
//! Validation failures come back unchanged as a field → message map
//! with status 400; a missing id is a 404 on every operation.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::db::repository;
use crate::models::{Appointment, AppointmentForm};
use crate::state::AppState;
use crate::validate;

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Appointment {id} not found"))
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// `POST /api/appointments` — validate and persist a submission.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(form): Json<AppointmentForm>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let errors = validate::validate(&form);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let conn = state.open_db()?;
    let id = repository::insert_appointment(&conn, &form)?;

    tracing::info!(id, date = %form.date.trim(), time = %form.time.trim(), "Appointment booked");

    Ok(Json(CreatedResponse { id }))
}

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

/// `GET /api/appointments` — list appointments ordered by date, then time.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let conn = state.open_db()?;
    let appointments = repository::list_appointments(&conn)?;

    Ok(Json(AppointmentsResponse { appointments }))
}

/// `GET /api/appointments/:id` — fetch a single appointment.
pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = state.open_db()?;
    let appt = repository::get_appointment(&conn, id)?.ok_or_else(|| not_found(id))?;

    Ok(Json(appt))
}

/// `PUT /api/appointments/:id` — validate and overwrite all five fields.
///
/// Never inserts: an unknown id is a 404, not an upsert.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(form): Json<AppointmentForm>,
) -> Result<Json<Appointment>, ApiError> {
    let errors = validate::validate(&form);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let conn = state.open_db()?;
    if !repository::update_appointment(&conn, id, &form)? {
        return Err(not_found(id));
    }

    tracing::info!(id, "Appointment updated");

    let appt = repository::get_appointment(&conn, id)?.ok_or_else(|| not_found(id))?;
    Ok(Json(appt))
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// `DELETE /api/appointments/:id` — cancel an appointment.
///
/// A second delete of the same id reports 404 so the caller can say
/// "nothing to delete" instead of silently succeeding.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = state.open_db()?;
    if !repository::delete_appointment(&conn, id)? {
        return Err(not_found(id));
    }

    tracing::info!(id, "Appointment deleted");

    Ok(Json(DeletedResponse { deleted: true }))
}
