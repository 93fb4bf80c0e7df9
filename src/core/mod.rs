//! Core utilities for the Sleeper Fantasy Football CLI
//!
//! - `cache`: memory + file system response cache
//! - `http`: default request headers

pub mod cache;
pub mod http;

pub use cache::{cache_root, try_read_to_string, write_string, CacheKey, CacheManager, UnifiedCache};
pub use http::default_headers;
