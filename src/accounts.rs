//! Player accounts
//!
//! Username and password rules, password hashing, and the user record.

use crate::config::GameConfig;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Why a username or password was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Username must be at least {0} characters long")]
    UsernameTooShort(usize),

    #[error("Username must contain only letters")]
    UsernameNotAlphabetic,

    #[error("Username must contain both upper and lower case letters")]
    UsernameMixedCase,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Password must contain alphabetic characters")]
    PasswordMissingLetter,

    #[error("Password must contain numeric characters")]
    PasswordMissingDigit,

    #[error("Password must contain special characters ({0})")]
    PasswordMissingSpecial(String),
}

/// Check a username against the configured rules
///
/// # Errors
/// Returns the first rule the username breaks.
pub fn validate_username(username: &str, config: &GameConfig) -> Result<(), AccountError> {
    if username.chars().count() < config.min_username_length {
        return Err(AccountError::UsernameTooShort(config.min_username_length));
    }

    if !username.chars().all(char::is_alphabetic) {
        return Err(AccountError::UsernameNotAlphabetic);
    }

    let has_upper = username.chars().any(char::is_uppercase);
    let has_lower = username.chars().any(char::is_lowercase);
    if !(has_upper && has_lower) {
        return Err(AccountError::UsernameMixedCase);
    }

    Ok(())
}

/// Check a password against the configured rules
///
/// # Errors
/// Returns the first rule the password breaks.
pub fn validate_password(password: &str, config: &GameConfig) -> Result<(), AccountError> {
    if password.chars().count() < config.min_password_length {
        return Err(AccountError::PasswordTooShort(config.min_password_length));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AccountError::PasswordMissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AccountError::PasswordMissingDigit);
    }

    let specials = &config.required_special_chars;
    if !password.chars().any(|c| specials.contains(c)) {
        return Err(AccountError::PasswordMissingSpecial(specials.clone()));
    }

    Ok(())
}

/// Username derived from `stem` that passes [`validate_username`]
///
/// Non-letters are dropped and missing cases added. Short names are padded
/// with leading `x`s, so distinct stems that start with an uppercase letter
/// stay distinct.
#[must_use]
pub fn conforming_username(stem: &str, config: &GameConfig) -> String {
    let mut name: String = stem.chars().filter(|c| c.is_alphabetic()).collect();
    if !name.chars().any(char::is_uppercase) {
        name.insert(0, 'U');
    }
    if !name.chars().any(char::is_lowercase) {
        name.push('x');
    }

    let missing = config
        .min_username_length
        .saturating_sub(name.chars().count());
    format!("{}{name}", "x".repeat(missing))
}

/// Password derived from `stem` that passes [`validate_password`]
#[must_use]
pub fn conforming_password(stem: &str, config: &GameConfig) -> String {
    let special = config.required_special_chars.chars().next().unwrap_or('@');
    let mut password = format!("{stem}a1{special}");

    let missing = config
        .min_password_length
        .saturating_sub(password.chars().count());
    password.extend(std::iter::repeat_n('0', missing));
    password
}

/// Hex-encoded SHA-256 digest of a password
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    #[must_use]
    pub fn new(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        Self(hex::encode(digest))
    }

    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        Self::new(password) == *self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep digests out of debug output
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Player,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }
}
