//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by reference to the client, wallet factory and distributor
//!
//! environment / .env
//!     → credentials.rs (JSON array of private keys)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults, so no file is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod credentials;
pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::CredentialsConfig;
pub use schema::LoggingConfig;
pub use schema::NetworkConfig;
pub use schema::TransferConfig;
