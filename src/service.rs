//! Validation and deadline handling in front of the entity repositories.
//!
//! Every service trims its string inputs, rejects empty values, and then
//! calls its repository under the configured per-call deadline.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::backend::{BrandBackend, CompanyBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Brand, Company, User};

async fn with_timeout<F>(timeout: Option<Duration>, call: F) -> AppResult<i64>
where
    F: Future<Output = AppResult<i64>>,
{
    match timeout {
        None => call.await,
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = limit.as_millis() as u64, "datasource call timed out");
                Err(AppError::Timeout)
            }
        },
    }
}

pub struct UserService {
    repo: Arc<dyn UserBackend>,
    timeout: Option<Duration>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserBackend>, timeout: Option<Duration>) -> Self {
        Self { repo, timeout }
    }

    pub async fn create_user(&self, name: &str, last_name: &str) -> AppResult<i64> {
        let name = name.trim();
        let last_name = last_name.trim();
        if name.is_empty() || last_name.is_empty() {
            return Err(AppError::Validation(
                "name and lastName are required".to_string(),
            ));
        }

        let user = User {
            id: 0,
            name: name.to_string(),
            last_name: last_name.to_string(),
        };

        let id = with_timeout(self.timeout, self.repo.create_user(&user)).await?;
        debug!(id, "user created");
        Ok(id)
    }
}

pub struct CompanyService {
    repo: Arc<dyn CompanyBackend>,
    timeout: Option<Duration>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyBackend>, timeout: Option<Duration>) -> Self {
        Self { repo, timeout }
    }

    pub async fn create_company(&self, name: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("company name is required".to_string()));
        }

        let company = Company {
            id: 0,
            name: name.to_string(),
        };

        let id = with_timeout(self.timeout, self.repo.create_company(&company)).await?;
        debug!(id, "company created");
        Ok(id)
    }
}

pub struct BrandService {
    repo: Arc<dyn BrandBackend>,
    timeout: Option<Duration>,
}

impl BrandService {
    pub fn new(repo: Arc<dyn BrandBackend>, timeout: Option<Duration>) -> Self {
        Self { repo, timeout }
    }

    pub async fn create_brand(&self, name: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("brand name is required".to_string()));
        }

        let brand = Brand {
            id: 0,
            name: name.to_string(),
        };

        let id = with_timeout(self.timeout, self.repo.create_brand(&brand)).await?;
        debug!(id, "brand created");
        Ok(id)
    }
}
