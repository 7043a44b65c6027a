//! Data models for resume parsing.

pub mod config;
pub mod resume;
