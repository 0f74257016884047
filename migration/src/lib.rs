pub use sea_orm_migration::prelude::*;

mod m20251019_000001_foodgram_user;
mod m20251019_000002_ingredient;
mod m20251019_000003_tag;
mod m20251019_000004_recipe;
mod m20251019_000005_recipe_tag;
mod m20251019_000006_recipe_ingredient;
mod m20251019_000007_favorite;
mod m20251019_000008_shopping_cart;
mod m20251019_000009_subscription;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_foodgram_user::Migration),
            Box::new(m20251019_000002_ingredient::Migration),
            Box::new(m20251019_000003_tag::Migration),
            Box::new(m20251019_000004_recipe::Migration),
            Box::new(m20251019_000005_recipe_tag::Migration),
            Box::new(m20251019_000006_recipe_ingredient::Migration),
            Box::new(m20251019_000007_favorite::Migration),
            Box::new(m20251019_000008_shopping_cart::Migration),
            Box::new(m20251019_000009_subscription::Migration),
        ]
    }
}
