//! User accounts: registration, credential checks and public profiles.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, CreatedUserDto, SetPasswordDto, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, user::UserError, Error},
        model::db::UserModel,
        service::{collection::is_unique_violation, recipe::projection::RecipeProjector},
        util::password::{hash_password, verify_password},
    },
};

/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 150;
/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// # Returns
    /// - `Ok(CreatedUserDto)` - The stored account without its password
    /// - `Err(Error::UserError)` - A field is missing or invalid, or the email or username
    ///   is already taken
    pub async fn register(&self, payload: CreateUserDto) -> Result<CreatedUserDto, Error> {
        validate_registration(&payload)?;

        let user_repository = UserRepository::new(self.db);
        if user_repository.get_by_email(&payload.email).await?.is_some() {
            return Err(UserError::EmailTaken.into());
        }
        if user_repository.username_exists(&payload.username).await? {
            return Err(UserError::UsernameTaken.into());
        }

        let password_hash = hash_password(&payload.password)?;

        let result = user_repository
            .create(NewUser {
                email: &payload.email,
                username: &payload.username,
                first_name: &payload.first_name,
                last_name: &payload.last_name,
                password_hash: &password_hash,
            })
            .await;

        let user = match result {
            Ok(user) => user,
            // Lost a race with a concurrent registration
            Err(err) if is_unique_violation(&err) => {
                return Err(taken_error(&user_repository, &payload.username)
                    .await?
                    .into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = user.id, "Registered user");

        Ok(CreatedUserDto {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }

    /// Looks up a user by email and checks their password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .get_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Changes the password of a logged in user after checking the current one
    ///
    /// # Returns
    /// - `Ok(())` - New password hash stored
    /// - `Err(UserError::RequiredField | PasswordTooShort)` - New password rejected
    /// - `Err(UserError::InvalidCurrentPassword)` - Current password does not match
    pub async fn set_password(
        &self,
        user: &UserModel,
        payload: SetPasswordDto,
    ) -> Result<(), Error> {
        if payload.current_password.is_empty() {
            return Err(UserError::RequiredField("current_password").into());
        }
        if payload.new_password.trim().is_empty() {
            return Err(UserError::RequiredField("new_password").into());
        }

        if !verify_password(&payload.current_password, &user.password_hash) {
            return Err(UserError::InvalidCurrentPassword.into());
        }

        if payload.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserError::PasswordTooShort(MIN_PASSWORD_LEN).into());
        }

        let password_hash = hash_password(&payload.new_password)?;
        UserRepository::new(self.db)
            .update_password_hash(user.id, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, "Changed password");

        Ok(())
    }

    /// Public profile of `user_id` as seen by `viewer`
    pub async fn get_profile(&self, user_id: i32, viewer: Option<i32>) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))?;

        RecipeProjector::new(self.db)
            .user_profile(user, viewer)
            .await
    }

    /// Every user ordered by ID as seen by `viewer`
    pub async fn list(&self, viewer: Option<i32>) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        let projector = RecipeProjector::new(self.db);
        let mut dtos = Vec::with_capacity(users.len());
        for user in users {
            dtos.push(projector.user_profile(user, viewer).await?);
        }

        Ok(dtos)
    }
}

/// Checks registration fields, reporting the first problem found
pub fn validate_registration(payload: &CreateUserDto) -> Result<(), UserError> {
    let required = [
        ("email", &payload.email),
        ("username", &payload.username),
        ("first_name", &payload.first_name),
        ("last_name", &payload.last_name),
        ("password", &payload.password),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(UserError::RequiredField(*field));
    }

    if !is_valid_email(&payload.email) {
        return Err(UserError::InvalidEmail);
    }

    if payload.username.chars().count() > MAX_USERNAME_LEN
        || !payload
            .username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
    {
        return Err(UserError::InvalidUsername(MAX_USERNAME_LEN));
    }

    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::PasswordTooShort(MIN_PASSWORD_LEN));
    }

    Ok(())
}

/// Picks the uniqueness error for a registration that tripped a constraint
async fn taken_error(
    user_repository: &UserRepository<'_, DatabaseConnection>,
    username: &str,
) -> Result<UserError, Error> {
    if user_repository.username_exists(username).await? {
        Ok(UserError::UsernameTaken)
    } else {
        Ok(UserError::EmailTaken)
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
