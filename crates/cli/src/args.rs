//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage index templates and component templates on a search cluster.
#[derive(Debug, Parser)]
#[command(name = "templatectl", version, about)]
pub struct Cli {
    /// Base URL of the cluster (e.g. https://localhost:9200)
    #[arg(long, global = true, env = "TEMPLATECTL_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token for authenticated clusters
    #[arg(long, global = true, env = "TEMPLATECTL_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum retries for rate-limited requests
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (self-signed dev clusters only)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage component templates
    #[command(subcommand, name = "component-template")]
    ComponentTemplate(ComponentTemplateCommands),

    /// Manage index templates
    #[command(subcommand, name = "index-template")]
    IndexTemplate(IndexTemplateCommands),

    /// Resolve the template configuration an index name would be created with
    Simulate(SimulateArgs),
}

#[derive(Debug, Subcommand)]
pub enum ComponentTemplateCommands {
    /// Create or update a component template from a JSON or YAML file
    Put {
        /// Template name
        name: String,
        /// Path to the template body
        #[arg(long)]
        file: PathBuf,
    },
    /// Print a component template
    Get {
        /// Template name
        name: String,
    },
    /// List all component templates
    List,
    /// Delete a component template
    Delete {
        /// Template name
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum IndexTemplateCommands {
    /// Create or update an index template from a JSON or YAML file
    Put {
        /// Template name
        name: String,
        /// Path to the template body
        #[arg(long)]
        file: PathBuf,
    },
    /// Print an index template
    Get {
        /// Template name
        name: String,
    },
    /// List all index templates
    List,
    /// Delete an index template
    Delete {
        /// Template name
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Index or data stream name to resolve
    pub index_name: String,

    /// Resolve offline against a local template directory instead of the
    /// cluster. The directory holds `component_templates/*.json` and
    /// `index_templates/*.json`, one template per file, named by file stem.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}
