use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{RecipeDto, RecipeListParams, RecipeShortDto, RecipeWriteDto},
    },
    server::{
        controller::util::get_user::{get_user_from_session, get_viewer_id},
        error::Error,
        model::app::AppState,
        service::{
            collection::{Collection, CollectionService},
            recipe::RecipeService,
            shopping_list::ShoppingListService,
        },
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes newest first
///
/// `tags` may be repeated and matches recipes with any of the given slugs.
/// `is_favorited` and `is_in_shopping_cart` only apply to logged in users.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(RecipeListParams),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RecipeListParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let recipes = RecipeService::new(&state.db, &state.settings)
        .list(&params, viewer)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Create a recipe authored by the logged in user
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipeWriteDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid recipe", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db, &state.settings)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a recipe by ID
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let recipe = RecipeService::new(&state.db, &state.settings)
        .get(recipe_id, viewer)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Replace a recipe, only its author may do so
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = RecipeWriteDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(payload): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db, &state.settings)
        .update(recipe_id, user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Delete a recipe, only its author may do so
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    RecipeService::new(&state.db, &state.settings)
        .delete(recipe_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the logged in user's favorites
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe favorited", body = RecipeShortDto),
        (status = 400, description = "Already in favorites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add_to_collection(state, session, recipe_id, Collection::Favorites).await
}

/// Remove a recipe from the logged in user's favorites
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from favorites"),
        (status = 400, description = "Not in favorites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove_from_collection(state, session, recipe_id, Collection::Favorites).await
}

/// Add a recipe to the logged in user's shopping cart
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to the shopping cart", body = RecipeShortDto),
        (status = 400, description = "Already in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add_to_collection(state, session, recipe_id, Collection::ShoppingCart).await
}

/// Remove a recipe from the logged in user's shopping cart
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from the shopping cart"),
        (status = 400, description = "Not in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove_from_collection(state, session, recipe_id, Collection::ShoppingCart).await
}

/// Download the logged in user's shopping list as a text attachment
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Shopping list", body = String, content_type = "text/plain"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shopping_list = ShoppingListService::new(&state.db).render(user.id).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename={}",
                state.settings.shopping_list_file_name
            ),
        ),
    ];

    Ok((StatusCode::OK, headers, shopping_list))
}

async fn add_to_collection(
    state: AppState,
    session: Session,
    recipe_id: i32,
    collection: Collection,
) -> Result<(StatusCode, Json<RecipeShortDto>), Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = CollectionService::new(&state.db, collection)
        .add(user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

async fn remove_from_collection(
    state: AppState,
    session: Session,
    recipe_id: i32,
    collection: Collection,
) -> Result<StatusCode, Error> {
    let user = get_user_from_session(&state, &session).await?;

    CollectionService::new(&state.db, collection)
        .remove(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
