use std::io::IsTerminal;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use tsq::cli::Cli;
use tsq::source::SourceConfig;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let timeout = cli.fetch_timeout();
    let location = match cli.state {
        Some(state) => state,
        None => SourceConfig::default().resolve(),
    };

    let state = tsq::load(&location, timeout).await?;
    tracing::debug!(
        location = %location,
        terraform_version = %state.document().terraform_version,
        serial = ?state.document().serial,
        resources = state.document().resources.len(),
        addresses = state.len(),
        "state loaded"
    );

    match cli.address {
        Some(address) => {
            let result = state.lookup(&address)?;
            let pretty = std::io::stdout().is_terminal();
            println!("{}", tsq::output::format_value(&result.bytes(), pretty));
        }
        None => {
            println!("{}", state.list().join("\n"));
        }
    }

    Ok(())
}
