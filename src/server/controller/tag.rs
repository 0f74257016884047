use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, recipe::TagDto},
    server::{
        data::tag::TagRepository,
        error::{recipe::RecipeError, Error},
        model::app::AppState,
        service::recipe::projection::tag_dto,
    },
};

pub static TAG_TAG: &str = "tag";

/// List every tag
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tags: Vec<TagDto> = TagRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(tag_dto)
        .collect();

    Ok((StatusCode::OK, Json(tags)))
}

/// Get a tag by ID
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag found", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tag = TagRepository::new(&state.db)
        .get_by_id(tag_id)
        .await?
        .ok_or(RecipeError::TagNotFound(tag_id))?;

    Ok((StatusCode::OK, Json(tag_dto(tag))))
}
