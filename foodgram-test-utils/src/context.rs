//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database, an in-memory session and a temporary media directory that
//! is removed when the context is dropped.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_recipe_tables().build().await?;
///
/// let author = test.user().insert_user("author").await?;
/// let salt = test.recipe().insert_ingredient("salt", "g").await?;
///
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Temporary directory used as media root, deleted on drop
    pub(crate) media: TempDir,
}

impl TestContext {
    /// Convert the database connection and media root into any type constructible
    /// from them.
    ///
    /// This allows conversion to `AppState` without the test utilities depending on the
    /// main foodgram crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.media_root().to_path_buf()))
    }

    /// Directory uploaded images are written to during the test
    pub fn media_root(&self) -> &Path {
        self.media.path()
    }
}

impl TestContext {
    /// Create a new test context with an empty database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary media directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let media = tempfile::tempdir()?;

        Ok(TestContext { db, session, media })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
