use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "jotpad")]
#[command(version = "0.1.0")]
#[command(about = "A minimal terminal text editor with New, Open and Save")]
pub struct CliArgs {
    /// File to open at startup
    pub file: Option<PathBuf>,

    /// Color theme (classic or dark); overrides the config file
    #[arg(long, short = 'T')]
    pub theme: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write log records to this file (RUST_LOG sets the level)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
