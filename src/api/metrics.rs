use actix_web::{web, HttpResponse};

use crate::middleware::RequestMetrics;

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Request counters in Prometheus text format", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(metrics: web::Data<RequestMetrics>) -> HttpResponse {
    let body = format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP http_in_flight Requests currently being handled\n\
         # TYPE http_in_flight gauge\n\
         http_in_flight {}\n",
        metrics.requests_total(),
        metrics.errors_total(),
        metrics.in_flight()
    );

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body)
}
