//! API Routes
//!
//! Configures the Axum router with all registry endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_animal, delete_animal, get_animal, health_handler, list_animals, update_animal,
    AppState,
};

/// Collection route.
pub const ANIMALS: &str = "/v1/animal";
/// Single-record route.
pub const ANIMAL_BY_ID: &str = "/v1/animal/:id";
/// Liveness route.
pub const HEALTH: &str = "/health";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /v1/animal` - Register an animal
/// - `GET /v1/animal` - List all animals
/// - `GET /v1/animal/:id` - Fetch one animal
/// - `PUT /v1/animal/:id` - Create or overwrite an animal
/// - `DELETE /v1/animal/:id` - Remove an animal
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(ANIMALS, get(list_animals).post(create_animal))
        .route(
            ANIMAL_BY_ID,
            get(get_animal).put(update_animal).delete(delete_animal),
        )
        .route(HEALTH, get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::default())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri(HEALTH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(ANIMALS)
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":1,"name":"Fox","class":"Mammal","legs":4}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_list_empty_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri(ANIMALS).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/v1/animal/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
