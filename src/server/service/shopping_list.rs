//! Shopping list aggregation.
//!
//! Sums the ingredient amounts of every recipe in a user's shopping cart and renders them
//! as a plain text list, one `"<name> - <amount><unit>."` line per ingredient and unit.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::recipe_ingredient::{RecipeIngredientRepository, ShoppingListRow},
    error::Error,
};

/// First line of every shopping list
pub const SHOPPING_LIST_HEADER: &str = "Список покупок:";

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    /// Creates a new instance of [`ShoppingListService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders the shopping list of `user_id`, the header alone when the cart is empty
    pub async fn render(&self, user_id: i32) -> Result<String, Error> {
        let rows = RecipeIngredientRepository::new(self.db)
            .sum_for_cart(user_id)
            .await?;

        tracing::debug!(user_id, lines = rows.len(), "Rendering shopping list");

        Ok(render_shopping_list(&rows))
    }
}

/// Renders aggregated rows in the order given
pub fn render_shopping_list(rows: &[ShoppingListRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(SHOPPING_LIST_HEADER.to_string());
    lines.extend(
        rows.iter()
            .map(|row| format!("{} - {}{}.", row.name, row.total_amount, row.measurement_unit)),
    );

    lines.join("\n")
}
