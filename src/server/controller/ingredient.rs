use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        recipe::{IngredientDto, IngredientSearchParams},
    },
    server::{
        data::ingredient::IngredientRepository,
        error::{recipe::RecipeError, Error},
        model::app::AppState,
        service::recipe::projection::ingredient_dto,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// List ingredients ordered by name, optionally filtered by a case-insensitive name prefix
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let ingredients: Vec<IngredientDto> = IngredientRepository::new(&state.db)
        .search(params.name.as_deref())
        .await?
        .into_iter()
        .map(ingredient_dto)
        .collect();

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Get an ingredient by ID
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient found", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientRepository::new(&state.db)
        .get_by_id(ingredient_id)
        .await?
        .ok_or(RecipeError::IngredientNotFound(ingredient_id))?;

    Ok((StatusCode::OK, Json(ingredient_dto(ingredient))))
}
