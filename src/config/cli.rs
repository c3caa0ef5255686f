use crate::adapters::output::OutputFormat;
use crate::config::CorreiosConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "correios")]
#[command(about = "Track Correios shipments from the command line")]
pub struct CliArgs {
    /// Tracking codes, e.g. SS123456789BR
    #[arg(required_unless_present_any = ["list_services", "list_countries"])]
    pub codes: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the tracking endpoint; the code is appended to it
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print the known service codes and exit
    #[arg(long)]
    pub list_services: bool,

    /// Print the known country codes and exit
    #[arg(long)]
    pub list_countries: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// Command line values win over the file.
    pub fn apply_overrides(&self, config: &mut CorreiosConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.tracking.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.pretty {
            config.output.pretty = true;
        }
    }
}
