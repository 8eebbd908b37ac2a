//! Shared utilities for nepse-bot
//!
//! This crate provides common functionality used across the nepse-bot workspace:
//! tracing setup, `.env` loading and typed access to environment variables.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{EnvReader, load_dotenv};
pub use error::{Result, UtilsError};
pub use logging::{LogFormat, init_tracing, init_tracing_with};
