//! Core utilities for the playoffs calculator
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: In-memory and file system caching of provider responses
//! - `columns`: Spreadsheet column index/label conversion
//! - `http`: Shared request headers and credentials

pub mod cache;
pub mod columns;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_base_dir, try_read_to_string, write_string, PlayersCacheKey, UnifiedCache};
pub use columns::{col_from_label, col_to_label};
