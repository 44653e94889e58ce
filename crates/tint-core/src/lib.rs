//! tint-core: Core library for tint
//!
//! This crate provides the core functionality for `tint`, a terminal color
//! picker and palette manager.
//!
//! # Architecture
//!
//! ```text
//! CLI event → ColorState::apply → ColorSnapshot → display surfaces
//!                     ↓
//!              Palette / Presets → KvStore (JSON files)
//!                     ↓
//!                 NoticeBoard
//! ```
//!
//! # Modules
//!
//! - `convert`: pure RGB/HSL/hex conversion math
//! - `state`: current-color state and snapshot rendering
//! - `palette`: saved-color palette with write-through persistence
//! - `presets`: built-in and user-added named swatches
//! - `store`: key-value persistence boundary (trait + file/mem stores)
//! - `export`: palette export documents
//! - `clipboard`: copy-to-clipboard seam (OSC 52)
//! - `notify`: transient user notices
//! - `config`: tint.toml configuration
//! - `logging`: tracing subscriber setup
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod logging;
pub mod notify;
pub mod palette;
pub mod presets;
pub mod state;
pub mod store;

pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
