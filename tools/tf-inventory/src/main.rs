use clap::Parser;
use common::tracing::init_tracing;
use tf_inventory::{cli::Cli, generate::run};

fn main() -> anyhow::Result<()> {
    init_tracing("tf_inventory=info,warn");

    let cli = Cli::parse();
    tracing::debug!("Cli args: {:?}", cli);

    run(&cli)?;

    Ok(())
}
