use clap::Parser;

use program_recommender::{cli::Cli, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("warn");

    let cli = Cli::parse();
    let report = program_recommender::cli::run(&cli)?;
    print!("{report}");

    Ok(())
}
