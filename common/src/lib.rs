pub mod config;
pub mod games;
pub mod logger;
mod defaults;

pub use tracing;
