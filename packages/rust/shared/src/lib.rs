//! Shared types, error model, and configuration for Flashdeck.
//!
//! This crate is the foundation depended on by all other Flashdeck crates.
//! It provides:
//! - [`FlashdeckError`], the unified error type
//! - Domain types ([`RawRecord`], [`NormalizedRow`], [`RowField`], [`RowFilter`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, DocumentConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{FlashdeckError, Result};
pub use types::{DocumentFormat, NormalizedRow, RawRecord, RowField, RowFilter, TECHNICAL_SOURCE};
