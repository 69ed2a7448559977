pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod ui;

pub use error::{IsisVersionError, Result};
pub use parser::VersionParser;
