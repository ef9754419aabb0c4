use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    shelfscan::logging::init().context("init logging")?;

    let cli = shelfscan::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        shelfscan::cli::Command::Scan(args) => {
            shelfscan::scan::run(args).context("scan")?;
        }
    }

    Ok(())
}
