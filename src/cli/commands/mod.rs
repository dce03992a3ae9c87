//! Command implementations

mod catalog;
mod config;
mod serve;

pub use catalog::catalog;
pub use config::config;
pub use serve::serve;
