//! Environment configuration.
//!
//! Required variables are `DATABASE_URL` and `VALKEY_URL`. Everything else falls back to a
//! default, see [`RecipeSettings::default`].

use std::{path::PathBuf, str::FromStr};

use crate::server::error::config::ConfigError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    pub settings: RecipeSettings,
}

/// Limits and paths consumed by the recipe services
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeSettings {
    pub min_cooking_time: i32,
    pub max_cooking_time: i32,
    pub min_ingredient_amount: i32,
    pub max_ingredient_amount: i32,
    /// Maximum number of ingredient lines in one recipe
    pub max_ingredients: usize,
    /// File name of the shopping list attachment
    pub shopping_list_file_name: String,
    /// Directory uploaded recipe images are written to
    pub media_root: PathBuf,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self {
            min_cooking_time: 1,
            max_cooking_time: 300,
            min_ingredient_amount: 1,
            max_ingredient_amount: 10_000,
            max_ingredients: 50,
            shopping_list_file_name: "shopping_list.txt".to_string(),
            media_root: PathBuf::from("media"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let required = |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let defaults = RecipeSettings::default();

        let settings = RecipeSettings {
            min_cooking_time: parse_or(&get, "MIN_COOKING_TIME", defaults.min_cooking_time)?,
            max_cooking_time: parse_or(&get, "MAX_COOKING_TIME", defaults.max_cooking_time)?,
            min_ingredient_amount: parse_or(
                &get,
                "MIN_INGREDIENT_AMOUNT",
                defaults.min_ingredient_amount,
            )?,
            max_ingredient_amount: parse_or(
                &get,
                "MAX_INGREDIENT_AMOUNT",
                defaults.max_ingredient_amount,
            )?,
            max_ingredients: parse_or(&get, "MAX_INGREDIENTS", defaults.max_ingredients)?,
            shopping_list_file_name: get("SHOPPING_LIST_FILE_NAME")
                .unwrap_or(defaults.shopping_list_file_name),
            media_root: get("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.media_root),
        };

        check_range(
            "MIN_COOKING_TIME",
            settings.min_cooking_time,
            settings.max_cooking_time,
        )?;
        check_range(
            "MIN_INGREDIENT_AMOUNT",
            settings.min_ingredient_amount,
            settings.max_ingredient_amount,
        )?;
        // Amounts must stay strictly positive whatever the configured bounds
        if settings.min_ingredient_amount < 1 {
            return Err(ConfigError::InvalidEnvValue {
                var: "MIN_INGREDIENT_AMOUNT".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if settings.max_ingredients == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "MAX_INGREDIENTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            settings,
        })
    }
}

fn parse_or<T, G>(get: &G, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn check_range(var: &str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("minimum {} is greater than maximum {}", min, max),
        });
    }

    Ok(())
}
