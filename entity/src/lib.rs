pub mod prelude;

pub mod favorite;
pub mod foodgram_user;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod subscription;
pub mod tag;
