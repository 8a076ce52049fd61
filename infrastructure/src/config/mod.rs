//! Configuration file loading for brain-api
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PORT` environment variable
//! 2. `BRAIN_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./brain.toml` or `./.brain.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/brain-api/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{DEFAULT_PORT, FileConfig, FileGeminiConfig, FileServerConfig};
pub use loader::ConfigLoader;
