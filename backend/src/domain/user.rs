//! User data model.
//!
//! Every field of a [`User`] is a validated newtype, so a record that exists
//! is a record that satisfies the directory's field rules.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The name was empty.
    #[error("name must not be empty")]
    EmptyName,
    /// The email did not match standard address syntax.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// The age was zero or negative.
    #[error("age must be a positive integer")]
    NonPositiveAge,
    /// The age exceeded the representable range.
    #[error("age must be at most {max}")]
    AgeOutOfRange {
        /// Largest accepted age.
        max: u32,
    },
}

/// Server-generated user identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Name of the person a record describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum total length of an email address.
pub const EMAIL_MAX_LEN: usize = 254;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot placement in the local part is checked separately.
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]{1,64}",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
///
/// Surrounding whitespace is removed and the domain part is lowercased, so two
/// addresses compare equal when they route to the same mailbox domain. The
/// local part keeps its case.
///
/// # Examples
/// ```
/// use user_directory::domain::EmailAddress;
///
/// let email = EmailAddress::new(" Ada@Example.COM ").expect("valid email");
/// assert_eq!(email.as_ref(), "Ada@example.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate, normalise, and construct an [`EmailAddress`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let email = email.as_ref().trim();
        if email.len() > EMAIL_MAX_LEN || !email_regex().is_match(email) {
            return Err(UserValidationError::InvalidEmail);
        }

        let (local, domain) = email
            .rsplit_once('@')
            .ok_or(UserValidationError::InvalidEmail)?;
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return Err(UserValidationError::InvalidEmail);
        }

        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Age in whole years; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Age(u32);

impl Age {
    /// Validate and construct an [`Age`] from any signed integer input.
    pub fn new(age: i64) -> Result<Self, UserValidationError> {
        if age <= 0 {
            return Err(UserValidationError::NonPositiveAge);
        }
        u32::try_from(age)
            .map(Self)
            .map_err(|_| UserValidationError::AgeOutOfRange { max: u32::MAX })
    }

    /// Age in years.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Age> for u32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Age {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Client-supplied user fields, validated but not yet stored.
///
/// Create and update requests both carry a full profile; the directory never
/// applies partial changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: UserName,
    email: EmailAddress,
    age: Age,
}

impl UserProfile {
    /// Build a profile from validated components.
    pub fn new(name: UserName, email: EmailAddress, age: Age) -> Self {
        Self { name, email, age }
    }

    /// Fallible constructor validating raw field values.
    ///
    /// Fields are checked in declaration order and the first failure wins.
    pub fn try_from_parts(
        name: impl Into<String>,
        email: impl AsRef<str>,
        age: i64,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserName::new(name)?,
            EmailAddress::new(email)?,
            Age::new(age)?,
        ))
    }

    /// Name of the person.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Normalised email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Age in years.
    pub fn age(&self) -> Age {
        self.age
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is generated by the server and never changes.
/// - All profile fields are present and valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    /// Build a record from an identifier and a validated profile.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name of the person.
    pub fn name(&self) -> &UserName {
        self.profile.name()
    }

    /// Normalised email address.
    pub fn email(&self) -> &EmailAddress {
        self.profile.email()
    }

    /// Age in years.
    pub fn age(&self) -> Age {
        self.profile.age()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: String,
    name: String,
    email: String,
    age: i64,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, profile } = value;
        let UserProfile { name, email, age } = profile;
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            age: i64::from(age.get()),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            email,
            age,
        } = value;
        let profile = UserProfile::try_from_parts(name, email, age)?;
        Ok(Self::new(UserId::new(id)?, profile))
    }
}

#[cfg(test)]
mod tests;
