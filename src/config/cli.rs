use std::path::PathBuf;

use clap::{Args, builder::BoolishValueParser};

/// Global flags that override file and environment configuration.
#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "WEBBLOG_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Override the REST API base URL, e.g. <http://localhost:8080/api>.
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the session file written by the authentication provider.
    #[arg(long = "session-file", value_name = "PATH", global = true)]
    pub session_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}
