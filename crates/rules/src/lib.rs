//! Storage, repository and service layers for the conditional
//! gathering rules service.
//!
//! Rule definitions are read from disk exactly once at startup and held
//! as an immutable [`RuleSet`] for the lifetime of the process. The
//! [`Service`] is the single boundary where infrastructure failures are
//! normalized into the typed [`ServiceError`] taxonomy that the HTTP
//! layer maps onto status codes.

pub mod error;
pub mod loader;
pub mod model;
pub mod repository;
pub mod service;
pub mod storage;

pub use error::{ErrorCode, RepositoryError, ServiceError, StorageError};
pub use loader::{JsonLoader, RuleLoader, YamlLoader};
pub use model::RuleSet;
pub use repository::Repository;
pub use service::{GatheringService, Service};
pub use storage::{Storage, StorageConfig};
