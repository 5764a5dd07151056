use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Brand, Company, User};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;

pub use memory::MemoryBackend;

/// Supported backend types
#[derive(Debug, Clone, PartialEq)]
pub enum BackendType {
    Memory,
}

impl BackendType {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "memory" => Ok(BackendType::Memory),
            other => Err(AppError::Configuration(format!(
                "Unsupported backend type: {}",
                other
            ))),
        }
    }
}

/// Persistence for User records
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Insert a user and return its generated id
    async fn create_user(&self, user: &User) -> AppResult<i64>;
}

/// Persistence for Company records
#[async_trait]
pub trait CompanyBackend: Send + Sync {
    /// Insert a company and return its generated id
    async fn create_company(&self, company: &Company) -> AppResult<i64>;
}

/// Persistence for Brand records
#[async_trait]
pub trait BrandBackend: Send + Sync {
    /// Insert a brand and return its generated id
    async fn create_brand(&self, brand: &Brand) -> AppResult<i64>;
}

/// One repository per entity. Each entity may live in a different datasource.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserBackend>,
    pub companies: Arc<dyn CompanyBackend>,
    pub brands: Arc<dyn BrandBackend>,
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create the entity repositories described by configuration
    pub fn create(config: &BackendConfig) -> AppResult<Repositories> {
        match BackendType::parse(&config.backend_type)? {
            BackendType::Memory => {
                let backend = Arc::new(MemoryBackend::new());
                Ok(Repositories {
                    users: backend.clone(),
                    companies: backend.clone(),
                    brands: backend,
                })
            }
        }
    }
}
