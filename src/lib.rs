pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod splitter;
pub mod transform;
pub mod utils;

pub use error::{SplitError, SplitResult};
