use clap::Parser;

/// Overrides for the `SERVICE_*` environment configuration.
#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(long)]
    pub port: Option<u16>,
    #[clap(long)]
    pub data_file: Option<String>,
    #[clap(long)]
    pub web_folder: Option<String>,
    /// Keep records in memory only; nothing is written to disk.
    #[clap(long)]
    pub in_memory: bool,
}
