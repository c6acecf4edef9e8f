//! Shortpath Core Library
//!
//! Single-source shortest paths over undirected weighted graphs, with
//! interchangeable frontier strategies.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
