use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::config::RecipeSettings;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Arc<RecipeSettings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: RecipeSettings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }
}

/// Default settings with the given media root, used by test contexts
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, media_root): (DatabaseConnection, PathBuf)) -> Self {
        Self::new(
            db,
            RecipeSettings {
                media_root,
                ..Default::default()
            },
        )
    }
}
