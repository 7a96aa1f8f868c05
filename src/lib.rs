// Expose the modules
pub mod api;
pub mod config;
pub mod domain;
pub mod telemetry;

// Re-export key types for easier usage
pub use api::{Api, ApiError, AppState};
pub use config::{CliArgs, Config, ConfigError, LogFormat};
pub use domain::models::types::{OrderConfirmation, OrderId, OrderRequest};
pub use domain::services::intake::{
    order_id::IdStrategy, FieldError, FieldErrorKind, OrderIdGenerator, OrderIntakeService,
    OrderIntakeServiceImpl, SequentialOrderIdGenerator, UuidOrderIdGenerator, ValidationError,
};
