pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod resource;
pub mod service;
pub mod startup;
pub mod store;

// Re-export commonly used types for easier access
pub use models::Item;
pub use store::{ItemStore, StoreError};
