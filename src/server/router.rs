//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` with Swagger UI at
//! `/api/docs`, and the media root is served at `/media`.

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, util::image::MEDIA_URL};

/// Builds the application's HTTP router.
///
/// # Arguments
/// - `media_root` - Directory uploaded recipe images are stored in, served at `/media`
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, config.settings.clone());
/// let router = routes(&config.settings.media_root)
///     .with_state(app_state)
///     .layer(session);
/// ```
pub fn routes(media_root: &Path) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Foodgram", description = "Foodgram recipe API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session login and logout"),
        (name = controller::user::USER_TAG, description = "Users and subscriptions"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipes, favorites and the shopping cart"),
        (name = controller::tag::TAG_TAG, description = "Recipe tags"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredients"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_current_user))
        .routes(routes!(controller::user::set_password))
        .routes(routes!(controller::user::list_subscriptions))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::user::subscribe,
            controller::user::unsubscribe
        ))
        .routes(routes!(controller::tag::list_tags))
        .routes(routes!(controller::tag::get_tag))
        .routes(routes!(controller::ingredient::list_ingredients))
        .routes(routes!(controller::ingredient::get_ingredient))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::download_shopping_cart))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::recipe::add_favorite,
            controller::recipe::remove_favorite
        ))
        .routes(routes!(
            controller::recipe::add_to_shopping_cart,
            controller::recipe::remove_from_shopping_cart
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service(MEDIA_URL, ServeDir::new(media_root))
        .layer(TraceLayer::new_for_http())
}
