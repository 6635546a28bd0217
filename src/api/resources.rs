//! Uniform CRUD endpoints, instantiated once per resource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::AppResult,
    models::Resource,
    services::{ServiceFor, Services},
    AppState,
};

/// `/{PATH}` and `/{PATH}/:id` routes for resource `R`
pub fn routes<R>() -> Router<AppState>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    Router::new()
        .route(&format!("/{}", R::PATH), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/:id", R::PATH),
            get(get_one::<R>).put(update::<R>).delete(delete::<R>),
        )
}

/// List every row
pub async fn list<R>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    let rows = state.services.crud::<R>().list().await?;
    Ok(Json(rows))
}

/// Get a row by ID
pub async fn get_one<R>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<R>>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    let row = state.services.crud::<R>().get_by_id(id).await?;
    Ok(Json(row))
}

/// Create a row
pub async fn create<R>(
    State(state): State<AppState>,
    Json(data): Json<R::Payload>,
) -> AppResult<(StatusCode, Json<R>)>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    let row = state.services.crud::<R>().create(data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Replace every writable field of a row
pub async fn update<R>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<R::Payload>,
) -> AppResult<Json<R>>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    let row = state.services.crud::<R>().update(id, data).await?;
    Ok(Json(row))
}

/// Delete a row
pub async fn delete<R>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<&'static str>
where
    R: Resource,
    Services: ServiceFor<R>,
{
    state.services.crud::<R>().delete(id).await
}
