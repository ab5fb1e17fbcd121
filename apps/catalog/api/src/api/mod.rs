//! API routes module

pub mod items;

use axum::Router;
use axum_helpers::{create_router, health_router, parse_allowed_origins};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health_router(state.config.app))
}

/// Full application: routes, docs and middleware
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let origins = parse_allowed_origins(&state.config.catalog.allowed_origins)?;
    Ok(create_router::<ApiDoc>(routes(state), origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, Config, Environment};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            catalog: CatalogConfig {
                seed_size: 600,
                allowed_origins: "http://localhost:5173".to_string(),
            },
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(&test_state()).unwrap();
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_items_served_at_root() {
        let app = app(&test_state()).unwrap();
        let (status, body) = get_json(app, "/items?limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 600);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
        assert_eq!(body["nextOffset"], 5);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_catalog_paths() {
        let app = app(&test_state()).unwrap();
        let (status, doc) = get_json(app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "Catalog API");
        assert!(doc["paths"]["/items"].is_object());
        assert!(doc["paths"]["/items/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_created_item_visible_through_shared_state() {
        let state = test_state();
        let app = app(&state).unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::post("/items")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Lamp","description":"Warm light","price":30,"image":"https://picsum.photos/seed/lamp/400/250"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let (_, body) = get_json(app, "/items/601").await;
        assert_eq!(body["name"], "Lamp");
        assert_eq!(body["price"], 30.0);
    }

    #[test]
    fn test_invalid_origin_list_fails() {
        let mut state = test_state();
        state.config.catalog.allowed_origins = " , ".to_string();
        assert!(app(&state).is_err());
    }
}
