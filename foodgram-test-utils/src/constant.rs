//! Shared constants for test fixtures.

/// Domain used for the email address of every fixture user.
///
/// A fixture user named `alice` receives the email `alice@example.com`.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";

/// Password hash stored for fixture users.
///
/// Not a valid argon2 PHC string, so fixture users can never log in. Tests that need a
/// working login register the user through the service layer instead.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Default cooking time, in minutes, for fixture recipes.
pub const TEST_COOKING_TIME: i32 = 30;
