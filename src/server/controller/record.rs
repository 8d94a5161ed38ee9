//! Generic handlers for the five record operations.
//!
//! Each handler resolves the caller and checks the resource's capability for the
//! operation before it reads any input, so an unauthorized request always yields 403
//! even when its parameters are malformed.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::api::MessageDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::resource::{Operation, Resource},
        service::record::RecordService,
        state::AppState,
        util::parse::parse_key,
    },
};

/// GET /api/{resource}/all - List every record of the resource
///
/// # Authentication
/// Capability for `Operation::List` (authenticated by default)
///
/// # Returns
/// - `200 OK`: JSON array of records
/// - `403 Forbidden`: Caller lacks the capability
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(R::capability(Operation::List))
        .await?;

    let records: Vec<R::Record> = RecordService::<R>::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(R::into_record)
        .collect();

    Ok((StatusCode::OK, Json(records)))
}

/// GET /api/{resource}?{key}= - Get one record by identity
///
/// # Returns
/// - `200 OK`: JSON record
/// - `400 Bad Request`: Identity missing or malformed
/// - `403 Forbidden`: Caller lacks the capability
/// - `404 Not Found`: No record has that identity
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    params: Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(R::capability(Operation::Get))
        .await?;

    let key = parse_key::<R>(&params)?;
    let model = RecordService::<R>::new(&state.db).get(key).await?;

    Ok((StatusCode::OK, Json(R::into_record(model))))
}

/// POST /api/{resource}/post?{fields} - Create a record from query parameters
///
/// # Returns
/// - `200 OK`: JSON of the stored record including its identity
/// - `400 Bad Request`: A field is missing or malformed
/// - `403 Forbidden`: Caller lacks the capability
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    fields: Result<Query<R::Fields>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(R::capability(Operation::Create))
        .await?;

    let Query(fields) = fields.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let model = RecordService::<R>::new(&state.db).create(fields).await?;

    Ok((StatusCode::OK, Json(R::into_record(model))))
}

/// PUT /api/{resource}?{key}= - Replace every mutable field of a record
///
/// Fields omitted from the body are stored as their default value.
///
/// # Returns
/// - `200 OK`: JSON of the updated record
/// - `400 Bad Request`: Identity or body malformed
/// - `403 Forbidden`: Caller lacks the capability
/// - `404 Not Found`: No record has that identity
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    params: Query<HashMap<String, String>>,
    replacement: Result<Json<R::Replacement>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(R::capability(Operation::Update))
        .await?;

    let key = parse_key::<R>(&params)?;
    let Json(replacement) = replacement.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let model = RecordService::<R>::new(&state.db)
        .update(key, replacement)
        .await?;

    Ok((StatusCode::OK, Json(R::into_record(model))))
}

/// DELETE /api/{resource}?{key}= - Delete a record
///
/// # Returns
/// - `200 OK`: `{message: "<Resource> with id <key> deleted"}`
/// - `400 Bad Request`: Identity missing or malformed
/// - `403 Forbidden`: Caller lacks the capability
/// - `404 Not Found`: No record has that identity
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    session: Session,
    params: Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(R::capability(Operation::Delete))
        .await?;

    let key = parse_key::<R>(&params)?;
    let message = RecordService::<R>::new(&state.db).delete(key).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
