//! Data models for extracted requests and configuration.

pub mod config;
pub mod record;
