//! Users API handlers.
//!
//! ```text
//! POST   /users        {"name":"Alice","email":"a@x.com","age":30}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Alice","email":"a@x.com","age":31}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{EmailAddress, Error, User, UserName, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    AGE, EMAIL, NAME, json_config, parse_age, parse_user_id, require, user_validation_error,
};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Fields are optional at the serde level so a missing field is reported
/// with its name rather than as a generic body parse failure.
///
/// Example JSON:
/// `{"name":"Alice","email":"a@x.com","age":30}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserRequest {
    /// Non-empty name.
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Unique, syntactically valid email address.
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    /// Positive age in years. Whole-number floats such as `30.0` are accepted.
    #[schema(value_type = Option<i64>, example = 30, minimum = 1)]
    pub age: Option<serde_json::Number>,
}

impl TryFrom<UserRequest> for UserProfile {
    type Error = Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        let UserRequest { name, email, age } = value;
        let name = UserName::new(require(name, NAME)?).map_err(user_validation_error)?;
        let email = EmailAddress::new(require(email, EMAIL)?).map_err(user_validation_error)?;
        let age = parse_age(&require(age, AGE)?)?;
        Ok(UserProfile::new(name, email, age))
    }
}

/// Register the user routes and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// Create a user with a server-generated identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid field or email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let profile = UserProfile::try_from(payload.into_inner())?;
    let user = state.users.create(profile).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get(id).await?;
    Ok(web::Json(user))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User replaced", body = UserSchema),
        (status = 400, description = "Invalid field or email registered to another user", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let profile = UserProfile::try_from(payload.into_inner())?;
    let user = state.users.update(id, profile).await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
