use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "test-service API",
        version = "1.0.0",
        description = "Health check and greeting endpoints."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::greeting::greeting,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::greeting::GreetingResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and request metrics."),
        (name = "Test", description = "Greeting endpoint for smoke tests."),
    )
)]
pub struct TestServiceDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-service API",
        version = "1.0.0",
        description = "Health check and in-memory user management. Users live for the lifetime of the process."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::User,
            crate::models::CreateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check and request metrics."),
        (name = "Users", description = "Create and read users."),
    )
)]
pub struct UserServiceDoc;
