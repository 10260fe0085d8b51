// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod projection;
pub mod seed;
pub mod store;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{LocalEngine, TranslationEngine};
pub use crate::error::{DataError, TranslateError};
