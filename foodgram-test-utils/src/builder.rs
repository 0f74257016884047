//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained and all queued operations run during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures queued here are inserted in the order users, tags, ingredients, so their
/// database IDs start at 1 and follow the order of the builder calls.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_recipe_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    tags: Vec<(String, String, String)>, // (name, color, slug)
    ingredients: Vec<(String, String)>,  // (name, measurement_unit)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_recipe_tables: false,
            users: Vec::new(),
            tags: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Add every table of the application to the test database.
    ///
    /// Creates user, ingredient, tag, recipe, the recipe association tables, favorite,
    /// shopping cart, and subscription tables in foreign key order.
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_recipe_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodgram_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), foodgram_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(FoodgramUser)
    ///     .with_table(Ingredient)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with `<username>@example.com` as email.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a tag.
    pub fn with_tag(
        mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        self.tags.push((name.into(), color.into(), slug.into()));
        self
    }

    /// Insert an ingredient.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Self {
        self.ingredients
            .push((name.into(), measurement_unit.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_recipe_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FoodgramUser),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeTag),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::ShoppingCart),
                schema.create_table_from_entity(entity::prelude::Subscription),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for (name, color, slug) in self.tags {
            setup.recipe().insert_tag(&name, &color, &slug).await?;
        }

        for (name, measurement_unit) in self.ingredients {
            setup
                .recipe()
                .insert_ingredient(&name, &measurement_unit)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
