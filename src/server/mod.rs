//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight HTTP server for CLI use

pub mod tiny_http;
