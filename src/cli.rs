use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Scan(ScanArgs),
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory containing the PDF files to catalog.
    #[arg(long, default_value = "./books")]
    pub books_dir: String,

    /// Output path for the catalog JSON (fully overwritten on each run).
    #[arg(long, default_value = "./catalog.json")]
    pub out: String,
}
