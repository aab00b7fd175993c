//! Engine configuration.
//!
//! Limits (trace path length, chained transitions) and policies (duplicate
//! transition requests, history retention) for a machine. Configuration is
//! built fluently or loaded from JSON and is validated either way.
//!
//! # Example
//!
//! ```rust
//! use hsm_engine::config::{ConfigBuilder, DuplicatePolicy};
//!
//! let config = ConfigBuilder::new()
//!     .max_nesting(6)
//!     .on_duplicate(DuplicatePolicy::KeepFirst)
//!     .history(32)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.max_nesting(), 6);
//! ```

pub mod builder;
pub mod policy;
pub mod settings;

pub use builder::ConfigBuilder;
pub use policy::{ConfigError, DuplicatePolicy};
pub use settings::{HsmConfig, DEFAULT_MAX_CHAINED_TRANSITIONS, MAX_HISTORY_CAPACITY};
