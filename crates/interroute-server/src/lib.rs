//! Shared library surface for the InterRoute server and its tests.

pub mod api;
pub mod config;
pub mod state;
