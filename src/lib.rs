//! NAVTEX Parser - message extraction and coordinate highlighting
//!
//! This library isolates the single `ZCZC ... NNNN` message in a raw NAVTEX
//! capture and lists the coordinate substrings it contains, scanning a fixed
//! sequence of historic coordinate notations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{CoordinateScanner, MessageExtractor, NavtexError, NavtexParser};
pub use crate::models::ParsedNavtex;
