pub mod greeting;
pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::UserStore;

/// Routes of test-service.
pub fn test_service_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", swagger::TestServiceDoc::openapi()),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/test", web::get().to(greeting::greeting));
}

/// Routes of user-service, bound to `store`.
pub fn user_service_routes(
    store: web::Data<UserStore>,
) -> impl Fn(&mut web::ServiceConfig) + Send + Clone + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(store.clone())
            .app_data(users::json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", swagger::UserServiceDoc::openapi()),
            )
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list_users))
                    .route("", web::post().to(users::create_user))
                    .route("/{id}", web::get().to(users::get_user)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, models::User};
    use actix_web::{
        http::{header::ContentType, StatusCode},
        test, App,
    };
    use serde_json::{json, Value};

    fn config(name: &str, port: u16) -> web::Data<Config> {
        web::Data::new(Config::from_lookup(name, port, |_| None))
    }

    macro_rules! user_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(config("user-service", 3001))
                    .configure(user_service_routes($store.clone())),
            )
            .await
        };
    }

    fn is_rfc3339(value: &Value) -> bool {
        value
            .as_str()
            .map(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
            .unwrap_or(false)
    }

    #[actix_web::test]
    async fn test_health_reports_healthy() {
        let app = test::init_service(
            App::new()
                .app_data(config("test-service", 3000))
                .configure(test_service_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert!(is_rfc3339(&body["time"]));
    }

    #[actix_web::test]
    async fn test_greeting_names_the_service() {
        let app = test::init_service(
            App::new()
                .app_data(config("test-service", 3000))
                .configure(test_service_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Hello from test-service");
        assert!(is_rfc3339(&body["time"]));
    }

    #[actix_web::test]
    async fn test_list_starts_empty() {
        let store = web::Data::new(UserStore::new());
        let app = user_app!(store);

        let req = test::TestRequest::get().uri("/users").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let store = web::Data::new(UserStore::new());
        let app = user_app!(store);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"username": "alice", "email": "a@x.com"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let created: User = test::read_body_json(res).await;
        assert_eq!(created.id.len(), 14);
        assert!(created.id.chars().all(|c| c.is_ascii_digit()));

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let fetched: User = test::read_body_json(res).await;
        assert_eq!(fetched.username, "alice");
        assert_eq!(fetched.email, "a@x.com");

        let req = test::TestRequest::get().uri("/users").to_request();
        let listed: Vec<User> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![fetched]);
    }

    #[actix_web::test]
    async fn test_client_supplied_id_is_overwritten() {
        let store = web::Data::new(UserStore::new());
        let app = user_app!(store);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"id": "chosen", "username": "bob", "email": "b@x.com"}))
            .to_request();
        let created: User = test::call_and_read_body_json(&app, req).await;

        assert_ne!(created.id, "chosen");
        assert!(store.get("chosen").is_none());
        assert!(store.get(&created.id).is_some());
    }

    #[actix_web::test]
    async fn test_unknown_user_is_404() {
        let store = web::Data::new(UserStore::new());
        let app = user_app!(store);

        let req = test::TestRequest::get().uri("/users/19990101000000").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "User not found"}));
    }

    #[actix_web::test]
    async fn test_invalid_bodies_are_400() {
        let store = web::Data::new(UserStore::new());
        let app = user_app!(store);

        let bodies = [
            "not json at all",
            r#"{"username": 42, "email": "a@x.com"}"#,
            r#""alice""#,
        ];

        for payload in bodies {
            let req = test::TestRequest::post()
                .uri("/users")
                .insert_header(ContentType::json())
                .set_payload(payload)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {}", payload);

            let body: Value = test::read_body_json(res).await;
            assert_eq!(body, json!({"error": "Invalid request"}));
        }

        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_health_ignores_store_state() {
        let store = web::Data::new(UserStore::new());
        store.insert(User {
            id: "20240101000000".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
        });
        let app = user_app!(store);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }
}
