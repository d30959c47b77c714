use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse};

/// OpenAPI documentation for the Booking Service API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booking Service API",
        version = "1.0.0",
        description = "Seat booking microservice. Every response carries a uniform envelope with `success`, `message`, and `data` fields; failures map to 404 (resource not found), 409 (seat already booked), or 500 (unexpected error). All error bodies, whichever endpoint produced them, follow the `ErrorResponse` schema.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "http://0.0.0.0:8080", description = "Docker development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints")
    ),
    paths(crate::routes::health_check),
    components(schemas(ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;
