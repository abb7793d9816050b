//! User endpoint handlers.
//!
//! ```text
//! GET    /api/users/{id}
//! POST   /api/users        (raw text body: name)
//! PUT    /api/users/{id}   (raw text body: name)
//! DELETE /api/users/{id}
//! ```
//!
//! Faithful port of a demonstration controller: responses are literal text,
//! and only the GET handler ever talks to the repository. The quirks below
//! are reproduced on purpose, not redesigned.

use actix_web::{delete, get, post, put, web};

use crate::domain::NewUser;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Fetch a user by identifier.
///
/// Known quirk, preserved verbatim from the system this service reproduces:
/// every call fabricates a record named `Test{id}` and saves it, so a read
/// unconditionally writes. The identifier assigned by the repository is
/// discarded; the response echoes the path parameter instead.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Canned user text", body = String),
        (status = 404, description = "Identifier is not an integer"),
        (status = 500, description = "Repository write failed"),
        (status = 503, description = "Repository unavailable")
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/{id}")]
pub async fn get_user(state: web::Data<HttpState>, id: web::Path<i64>) -> ApiResult<String> {
    let id = id.into_inner();
    state.users.save(NewUser::new(format!("Test{id}"))).await?;
    Ok(format!("User with ID: {id}"))
}

/// Create a user.
///
/// Stub: formats the submitted name into the response and persists nothing.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = String, description = "User name as raw text"),
    responses((status = 200, description = "Canned creation text", body = String)),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("")]
pub async fn create_user(name: String) -> ApiResult<String> {
    Ok(format!("Created user: {name}"))
}

/// Update a user.
///
/// Stub: echoes identifier and name, persists nothing.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body(content = String, description = "User name as raw text"),
    responses(
        (status = 200, description = "Canned update text", body = String),
        (status = 404, description = "Identifier is not an integer")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id}")]
pub async fn update_user(id: web::Path<i64>, name: String) -> ApiResult<String> {
    Ok(format!("Updated user ID {id} with name {name}"))
}

/// Delete a user.
///
/// Stub: echoes the identifier, persists nothing.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Canned deletion text", body = String),
        (status = 404, description = "Identifier is not an integer")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id}")]
pub async fn delete_user(id: web::Path<i64>) -> ApiResult<String> {
    Ok(format!("Deleted user with ID: {id}"))
}

#[cfg(test)]
mod tests;
