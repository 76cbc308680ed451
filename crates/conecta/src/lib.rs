//! Core crate for the Conecta project-proposal tracker database tooling.
//!
//! Holds the pieces shared by the schema initializer and the seeding crate:
//! environment-driven configuration, the two schema variants, categorical
//! vocabularies, and connection setup with a bounded startup wait.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

pub use config::DbConfig;
pub use error::Error;
pub use schema::SchemaVariant;
