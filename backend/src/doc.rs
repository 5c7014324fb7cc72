//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint (users, health) and the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds; `cargo run --bin openapi-dump` prints it for tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "An API for managing users with basic CRUD operations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserRequest, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Create, read, replace, and delete users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_user_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let users = paths.get("/users").expect("/users documented");
        assert!(users.post.is_some());
        assert!(users.get.is_some());

        let user = paths.get("/users/{id}").expect("/users/{id} documented");
        assert!(user.get.is_some());
        assert!(user.put.is_some());
        assert!(user.delete.is_some());

        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }

    #[test]
    fn registers_domain_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert!(schemas.keys().any(|name| name.ends_with("User")));
        assert!(schemas.keys().any(|name| name.ends_with("Error")));
        assert!(schemas.contains_key("UserRequest"));
    }

    #[test]
    fn carries_crate_version() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
