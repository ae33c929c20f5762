pub mod aws;
pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod lambda;
pub mod server;
pub mod storage;
pub mod telemetry;

pub use error::{Error, Result};
