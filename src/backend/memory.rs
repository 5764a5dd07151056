use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use super::{BrandBackend, CompanyBackend, UserBackend};
use crate::error::AppResult;
use crate::models::{Brand, Company, User};

/// Auto-increment table: ids start at 1 and are never reused.
#[derive(Debug)]
struct Table<T> {
    rows: RwLock<HashMap<i64, T>>,
    last_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    fn insert(&self, build: impl FnOnce(i64) -> T) -> i64 {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = build(id);
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, row);
        id
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// In-process backend holding users, companies and brands
#[derive(Debug)]
pub struct MemoryBackend {
    users: Table<User>,
    companies: Table<Company>,
    brands: Table<Brand>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            companies: Table::new(),
            brands: Table::new(),
        }
    }

    pub fn find_user(&self, id: i64) -> Option<User> {
        self.users.get(id)
    }

    pub fn find_company(&self, id: i64) -> Option<Company> {
        self.companies.get(id)
    }

    pub fn find_brand(&self, id: i64) -> Option<Brand> {
        self.brands.get(id)
    }

    /// Row counts as (users, companies, brands)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.users.len(), self.companies.len(), self.brands.len())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserBackend for MemoryBackend {
    async fn create_user(&self, user: &User) -> AppResult<i64> {
        let id = self.users.insert(|id| User {
            id,
            ..user.clone()
        });
        debug!(id, "user inserted");
        Ok(id)
    }
}

#[async_trait]
impl CompanyBackend for MemoryBackend {
    async fn create_company(&self, company: &Company) -> AppResult<i64> {
        let id = self.companies.insert(|id| Company {
            id,
            ..company.clone()
        });
        debug!(id, "company inserted");
        Ok(id)
    }
}

#[async_trait]
impl BrandBackend for MemoryBackend {
    async fn create_brand(&self, brand: &Brand) -> AppResult<i64> {
        let id = self.brands.insert(|id| Brand {
            id,
            ..brand.clone()
        });
        debug!(id, "brand inserted");
        Ok(id)
    }
}
