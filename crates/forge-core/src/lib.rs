pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use error::{ProviderError, Result};
