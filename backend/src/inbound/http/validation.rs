//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection is an [`Error::invalid_request`] whose `details` name the
//! offending field and a stable machine-readable code, so clients can map
//! failures back to form inputs.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::{Number, json};
use tracing::debug;

use crate::domain::{Age, Error, UserId, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidJson,
    EmptyName,
    InvalidEmail,
    NonPositiveAge,
    AgeOutOfRange,
    NonIntegerAge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::NonPositiveAge => "non_positive_age",
            ErrorCode::AgeOutOfRange => "age_out_of_range",
            ErrorCode::NonIntegerAge => "non_integer_age",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const AGE: FieldName = FieldName::new("age");
pub(crate) const USER_ID: FieldName = FieldName::new("id");

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
        "field": name,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Translate a field validation failure into an HTTP-facing error.
pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    let message = err.to_string();
    match err {
        UserValidationError::EmptyName => field_error(NAME, ErrorCode::EmptyName, message),
        UserValidationError::InvalidEmail => field_error(EMAIL, ErrorCode::InvalidEmail, message),
        UserValidationError::NonPositiveAge => {
            field_error(AGE, ErrorCode::NonPositiveAge, message)
        }
        UserValidationError::AgeOutOfRange { .. } => {
            field_error(AGE, ErrorCode::AgeOutOfRange, message)
        }
        UserValidationError::EmptyId | UserValidationError::InvalidId => {
            field_error(USER_ID, ErrorCode::InvalidUuid, message)
        }
    }
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Convert a JSON number into an [`Age`].
///
/// Whole-number floats such as `30.0` are accepted. Integers beyond the
/// signed 64-bit range report `age_out_of_range` rather than a parse error.
pub(crate) fn parse_age(raw: &Number) -> Result<Age, Error> {
    if let Some(value) = raw.as_i64() {
        return Age::new(value).map_err(user_validation_error);
    }
    if raw.is_u64() {
        return Err(age_out_of_range());
    }
    match raw.as_f64() {
        Some(value) if value.fract() == 0.0 => whole_age(value),
        _ => Err(field_error(
            AGE,
            ErrorCode::NonIntegerAge,
            "age must be a whole number",
        )),
    }
}

fn whole_age(value: f64) -> Result<Age, Error> {
    if value <= 0.0 {
        return Err(user_validation_error(UserValidationError::NonPositiveAge));
    }
    if value > f64::from(u32::MAX) {
        return Err(age_out_of_range());
    }
    // Whole and within u32, so the conversion is exact.
    Age::new(value as i64).map_err(user_validation_error)
}

fn age_out_of_range() -> Error {
    user_validation_error(UserValidationError::AgeOutOfRange { max: u32::MAX })
}

/// Parse a user identifier taken from the request path.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| invalid_uuid_error(USER_ID, raw))
}

fn json_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request(format!("invalid JSON body: {err}")).with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
    }))
}

/// JSON extractor configuration mapping body failures onto the error envelope.
///
/// Without this, malformed bodies would produce actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejected request body");
        json_error(&err).into()
    })
}
