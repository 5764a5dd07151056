#![allow(dead_code)]

use axum::Router;
use item_store_server::backend::{BackendFactory, Repositories};
use item_store_server::config::{AppConfig, BackendConfig, ServerConfig};
use item_store_server::startup::{build_router, AppState};
use item_store_server::ItemStore;
use serde_json::{json, Value};
use std::sync::Arc;

pub fn create_test_app_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        backend: BackendConfig {
            backend_type: "memory".to_string(),
        },
    }
}

/// Router over a freshly seeded store and memory backend
pub fn setup_test_app() -> Router {
    let config = create_test_app_config();
    let state = AppState::from_config(&config).unwrap();
    build_router(state)
}

/// Router over a caller-owned store so tests can inspect it directly
pub fn setup_test_app_with_store(store: Arc<ItemStore>) -> Router {
    let config = create_test_app_config();
    let repositories = BackendFactory::create(&config.backend).unwrap();
    setup_test_app_with(store, repositories)
}

pub fn setup_test_app_with(store: Arc<ItemStore>, repositories: Repositories) -> Router {
    setup_test_app_with_config(&create_test_app_config(), store, repositories)
}

pub fn setup_test_app_with_config(
    config: &AppConfig,
    store: Arc<ItemStore>,
    repositories: Repositories,
) -> Router {
    build_router(AppState::new(config, store, repositories))
}

pub fn item_json(name: &str) -> Value {
    json!({ "name": name })
}

/// Sort a JSON array of items by id
pub fn sorted_by_id(items: &Value) -> Vec<Value> {
    let mut items = items.as_array().cloned().unwrap_or_default();
    items.sort_by_key(|item| item["id"].as_i64().unwrap_or_default());
    items
}
