//! Recipe payload validation.
//!
//! Rules are checked in a fixed order and the first violation is reported. Whether the
//! referenced tags and ingredients exist is checked later, inside the write transaction.

use std::collections::HashSet;

use crate::{
    model::recipe::RecipeWriteDto,
    server::{config::RecipeSettings, error::recipe::RecipeError},
};

/// Maximum length of a recipe name in characters
pub const MAX_RECIPE_NAME_LEN: usize = 200;

/// A recipe payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecipe {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<i32>,
    /// `(ingredient_id, amount)` pairs in payload order
    pub ingredients: Vec<(i32, i32)>,
}

/// Validates a recipe payload against the configured limits.
///
/// # Returns
/// - `Ok(ValidRecipe)` - Payload with every required field present
/// - `Err(RecipeError)` - The first violated rule
pub fn validate_recipe(
    payload: &RecipeWriteDto,
    settings: &RecipeSettings,
) -> Result<ValidRecipe, RecipeError> {
    if payload.tags.is_empty() {
        return Err(RecipeError::TagsRequired);
    }
    if has_duplicates(payload.tags.iter().copied()) {
        return Err(RecipeError::DuplicateTags);
    }

    let name = required_text(payload.name.as_deref(), "name")?;
    let text = required_text(payload.text.as_deref(), "text")?;
    let cooking_time = payload
        .cooking_time
        .ok_or(RecipeError::RequiredField("cooking_time"))?;

    if payload.ingredients.is_empty() {
        return Err(RecipeError::IngredientsRequired);
    }
    if payload.ingredients.len() > settings.max_ingredients {
        return Err(RecipeError::TooManyIngredients(settings.max_ingredients));
    }
    if has_duplicates(payload.ingredients.iter().map(|i| i.id)) {
        return Err(RecipeError::DuplicateIngredients);
    }

    if !(settings.min_cooking_time..=settings.max_cooking_time).contains(&cooking_time) {
        return Err(RecipeError::CookingTimeOutOfRange {
            min: settings.min_cooking_time,
            max: settings.max_cooking_time,
        });
    }

    for ingredient in &payload.ingredients {
        if ingredient.amount <= 0 {
            return Err(RecipeError::AmountNotPositive);
        }
        if !(settings.min_ingredient_amount..=settings.max_ingredient_amount)
            .contains(&ingredient.amount)
        {
            return Err(RecipeError::AmountOutOfRange {
                min: settings.min_ingredient_amount,
                max: settings.max_ingredient_amount,
            });
        }
    }

    if name.chars().count() > MAX_RECIPE_NAME_LEN {
        return Err(RecipeError::NameTooLong(MAX_RECIPE_NAME_LEN));
    }

    Ok(ValidRecipe {
        name,
        text,
        cooking_time,
        tag_ids: payload.tags.clone(),
        ingredients: payload
            .ingredients
            .iter()
            .map(|i| (i.id, i.amount))
            .collect(),
    })
}

fn required_text(value: Option<&str>, field: &'static str) -> Result<String, RecipeError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(RecipeError::RequiredField(field)),
    }
}

fn has_duplicates(ids: impl Iterator<Item = i32>) -> bool {
    let mut seen = HashSet::new();
    ids.into_iter().any(|id| !seen.insert(id))
}
