pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalSnippetDir;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::combine::BuildMatrix;
pub use crate::core::engine::MatrixEngine;
pub use crate::core::pipeline::MatrixPipeline;
pub use crate::utils::error::{MatrixError, Result};
