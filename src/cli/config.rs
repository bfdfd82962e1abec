use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::service::autofill_service::DatasetConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "autofill-detection",
    version,
    about = "Match credential fields in a captured view structure"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append diagnostic events as JSON lines to this file
    #[arg(long, global = true)]
    pub trace_file: Option<String>,

    /// Path to config file (default: autofill-detection.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a fill request: suggest credentials for the matched fields
    Fill {
        /// Path to a view structure JSON file
        #[arg(long)]
        structure: String,

        /// Client state JSON echoed from a previous response, e.g. '{"saveType":17}'
        #[arg(long)]
        client_state: Option<String>,
    },

    /// Answer a save request: capture the entered credential values
    Save {
        /// Path to a view structure JSON file
        #[arg(long)]
        structure: String,

        /// Client state JSON echoed from the fill response
        #[arg(long)]
        client_state: Option<String>,
    },

    /// Print the hint → field map of a structure
    Inspect {
        /// Path to a view structure JSON file
        #[arg(long)]
        structure: String,

        /// Payload to collect: ids or text
        #[arg(long, default_value = "ids")]
        mode: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `autofill-detection.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL trace file; disabled when unset
    pub file: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("autofill-detection.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// CLI flag wins over the config file.
pub fn resolve_trace_file<'a>(cli: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli.or(config.trace.file.as_deref())
}
