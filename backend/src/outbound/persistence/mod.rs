//! MongoDB persistence adapters.
//!
//! Concrete implementations of domain repository ports backed by a MongoDB
//! database through the official async driver.
//!
//! - **Thin adapters**: repositories only translate between stored documents
//!   and domain types.
//! - **Internal models**: document structs (`models.rs`) never leave this
//!   module.
//! - **Strongly typed errors**: driver errors are mapped to the port's
//!   persistence error type.
//!
//! # Example
//!
//! ```ignore
//! use todo_backend::outbound::persistence::{MongoConfig, MongoConnection, MongoTodoRepository};
//!
//! let connection = MongoConnection::connect(&MongoConfig::new(uri, "worq_todo")).await?;
//! connection.ping().await?;
//! let repo = MongoTodoRepository::new(&connection.database());
//! ```

mod connection;
mod models;
mod mongo_todo_repository;

pub use connection::{ConnectionError, MongoConfig, MongoConnection};
pub use mongo_todo_repository::{MongoTodoRepository, TODOS_COLLECTION};
