// Public modules
pub mod config;
pub mod error;
pub mod executor;
pub mod help;
pub mod invocation;
pub mod resolver;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use resolver::Resolution;
