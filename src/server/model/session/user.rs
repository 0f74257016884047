use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the ID of the logged in user.
pub const SESSION_USER_ID_KEY: &str = "foodgram:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Store the logged in user's ID, rotating the session ID first
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.cycle_id().await?;
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get the logged in user's ID, `None` for anonymous sessions
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }

    /// Remove the user ID, returning it if one was stored
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = Self::get(session).await?;
        if user_id.is_some() {
            session
                .remove::<SessionUserId>(SESSION_USER_ID_KEY)
                .await?;
        }

        Ok(user_id)
    }
}
