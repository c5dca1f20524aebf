//! Core types, errors, and configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use types::{ActivityCounters, Glowbits, UserKey};
