use crate::server::{error::auth::AuthError, model::db::RecipeModel};

/// Ensures `user_id` authored `recipe`
pub fn ensure_author(recipe: &RecipeModel, user_id: i32) -> Result<(), AuthError> {
    if recipe.author_id != user_id {
        return Err(AuthError::NotRecipeAuthor {
            recipe_id: recipe.id,
            user_id,
        });
    }

    Ok(())
}
