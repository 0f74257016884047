pub use super::favorite::Entity as Favorite;
pub use super::foodgram_user::Entity as FoodgramUser;
pub use super::ingredient::Entity as Ingredient;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::recipe_tag::Entity as RecipeTag;
pub use super::shopping_cart::Entity as ShoppingCart;
pub use super::subscription::Entity as Subscription;
pub use super::tag::Entity as Tag;
