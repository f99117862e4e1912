pub mod catalog;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod logger;

pub use config::Config;
pub use error::GridFetchError;
