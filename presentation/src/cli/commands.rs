//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for brain-api
#[derive(Parser, Debug)]
#[command(name = "brain-api")]
#[command(author, version, about = "HTTP service that routes prompts to Gemini in a chosen mode")]
#[command(long_about = r#"
brain-api serves a small JSON API in front of Google Gemini. Each request
picks a mode (code, analysis, chat or general) that selects the system
instruction the model is seeded with.

Endpoints:
  GET  /health
  POST /v1/brain/query
  POST /v1/brain/generate-code
  POST /v1/brain/analyze-code

Configuration is loaded from (in priority order):
1. PORT and BRAIN_* environment variables
2. --config <path>     Explicit config file
3. ./brain.toml        Project-level config
4. ~/.config/brain-api/config.toml   Global config

The Gemini API key is read from GEMINI_API_KEY (see gemini.api_key_env).

Example:
  GEMINI_API_KEY=... brain-api --port 3000 -v
"#)]
pub struct Cli {
    /// Address to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port and PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
