//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so the HTTP adapter can
//! document responses without leaking utoipa into the domain.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The email is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User with ID 3fa85f64-5717-4562-b3fc-2c963f66afa6 not found.")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "6c3f2c1e-2b4e-4f0e-9a7d-1d2b3c4d5e6f")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the rejected field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-generated identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Name of the person.
    #[schema(example = "Alice")]
    name: String,
    /// Unique email address.
    #[schema(example = "a@x.com")]
    email: String,
    /// Positive age in years.
    #[schema(example = 30, minimum = 1)]
    age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn property_names(schema: RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn user_schema_matches_serialised_record() {
        let mut names = property_names(UserSchema::schema());
        names.sort();
        assert_eq!(names, ["age", "email", "id", "name"]);
    }

    #[test]
    fn error_schema_uses_camel_case() {
        let names = property_names(ErrorSchema::schema());
        assert!(names.iter().any(|n| n == "traceId"));
        assert!(names.iter().any(|n| n == "code"));
        assert!(names.iter().any(|n| n == "message"));
    }
}
