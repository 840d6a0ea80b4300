use clap::{Parser, ValueEnum};
use tracing::Level;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
    fn set_version(&mut self, version: i64);
}

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

// Configuration abstracts config options for the library console
#[derive(Debug, PartialEq, Clone, Parser)]
#[command(name = "library", about = "In-memory library catalogue console")]
pub struct Configuration {
    /// Branch name recorded in the metadata of published events
    #[arg(long = "branch", default_value = "main")]
    pub branch_id: String,

    /// Maximum level of diagnostics written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,

    /// Diagnostics output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: Level::WARN,
            log_format: LogFormat::Text,
        }
    }
}
