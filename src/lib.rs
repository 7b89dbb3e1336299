pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod dev;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod live;
pub mod types;
