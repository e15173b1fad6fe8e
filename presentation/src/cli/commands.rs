//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the assembled proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full Markdown document
    Document,
    /// Per-section status and latencies
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for openprop
#[derive(Parser, Debug)]
#[command(name = "openprop")]
#[command(author, version, about = "Generate business proposals with a local LLM")]
#[command(long_about = r#"
OpenProp assembles a business proposal from a template: each section is
generated by a locally hosted Ollama model, in template order, and the
results are concatenated into one Markdown document. Run metadata
(per-section latency, the finished document) is recorded in a local run
store.

Configuration files are loaded from (in priority order):
1. OPENPROP_* environment variables
2. --config <path>      Explicit config file
3. ./openprop.toml      Project-level config
4. ~/.config/openprop/config.toml   Global config

Example:
  openprop startup_seed --company NexaAI --goal "Raise $2M seed" --tone Bold
  openprop --wizard
  openprop --list-templates
"#)]
pub struct Cli {
    /// Template id (see --list-templates); not required in wizard mode
    pub template: Option<String>,

    /// Start the interactive wizard
    #[arg(short, long)]
    pub wizard: bool,

    /// Company name for the proposal
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Goal of the proposal
    #[arg(long, value_name = "GOAL")]
    pub goal: Option<String>,

    /// Tone of voice (e.g. Professional, Bold, Friendly)
    #[arg(long, value_name = "TONE")]
    pub tone: Option<String>,

    /// Fabricate output instead of calling the model
    #[arg(long)]
    pub simulate: bool,

    /// List the available templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "document")]
    pub output: OutputFormat,

    /// Also write the document to this file
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

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
