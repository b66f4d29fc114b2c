//! Database schema inspectors.

pub mod postgres;

pub use postgres::PostgresInspector;

pub use joinmap_core::SchemaInspector;
