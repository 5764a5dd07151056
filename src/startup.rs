use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::backend::{BackendFactory, Repositories};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::logging_middleware;
use crate::resource::{datasource, item};
use crate::service::{BrandService, CompanyService, UserService};
use crate::store::ItemStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemStore>,
    pub users: Arc<UserService>,
    pub companies: Arc<CompanyService>,
    pub brands: Arc<BrandService>,
}

impl AppState {
    pub fn new(config: &AppConfig, items: Arc<ItemStore>, repositories: Repositories) -> Self {
        let timeout = config.server.request_timeout();

        Self {
            items,
            users: Arc::new(UserService::new(repositories.users, timeout)),
            companies: Arc::new(CompanyService::new(repositories.companies, timeout)),
            brands: Arc::new(BrandService::new(repositories.brands, timeout)),
        }
    }

    /// Build state with a freshly seeded item store and the configured backend
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let repositories = BackendFactory::create(&config.backend)?;
        info!(backend = %config.backend.backend_type, "datasource backend ready");

        Ok(Self::new(config, Arc::new(ItemStore::new()), repositories))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(item::list_items).post(item::create_item))
        .route(
            "/items/{id}",
            get(item::get_item)
                .put(item::update_item)
                .delete(item::delete_item),
        )
        .route("/api/v1/users", post(datasource::create_user))
        .route("/api/v2/companies", post(datasource::create_company))
        .route("/api/v3/brands", post(datasource::create_brand))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
