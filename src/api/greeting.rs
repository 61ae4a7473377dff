use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{config::Config, utils::now_rfc3339};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    pub time: String,
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "Test",
    responses(
        (status = 200, description = "Greeting from the service", body = GreetingResponse)
    )
)]
pub async fn greeting(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(GreetingResponse {
        message: format!("Hello from {}", config.name),
        time: now_rfc3339(),
    })
}
