use actix_web::{web, HttpResponse};

use crate::{
    models::{CreateUserRequest, User},
    services::user_service,
    store::UserStore,
    utils::AppError,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, unordered", body = [User])
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = user_service::list_users(&store);
    log::info!("👥 GET /users - {} user(s)", users.len());
    HttpResponse::Ok().json(users)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Server-assigned user id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match user_service::get_user(&store, &id) {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::warn!("❌ GET /users/{} - {}", id, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let user = user_service::create_user(&store, request.into_inner(), chrono::Local::now());
    log::info!("✅ POST /users - created {} ({})", user.id, user.username);
    HttpResponse::Created().json(user)
}

/// Maps every body extraction failure to `400 {"error":"Invalid request"}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("❌ POST /users - rejected body: {}", err);
        AppError::InvalidRequest("Invalid request".to_string()).into()
    })
}
