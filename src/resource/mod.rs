pub mod datasource;
pub mod item;
