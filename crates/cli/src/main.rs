use clap::Parser;
use dnstap_flat_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;
mod pipeline;

#[derive(Parser)]
#[command(name = "dnstap-flat")]
#[command(version)]
#[command(about = "dnstap-flat - Flatten dnstap envelopes into anonymized JSON records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Envelope input (JSON lines); reads stdin when omitted
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Record output (JSON lines); writes stdout when omitted
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// IPv4 prefix length kept when anonymizing addresses
    #[arg(long)]
    ipv4_prefix: Option<u8>,

    /// IPv6 prefix length kept when anonymizing addresses
    #[arg(long)]
    ipv6_prefix: Option<u8>,

    /// Identity used for envelopes that carry none
    #[arg(long)]
    identity: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Stop at the first envelope that cannot be flattened
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        ipv4_prefix: cli.ipv4_prefix,
        ipv6_prefix: cli.ipv6_prefix,
        identity: cli.identity.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting dnstap-flat v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    let reader = pipeline::open_input(cli.input.as_deref()).await?;
    let writer = pipeline::open_output(cli.output.as_deref()).await?;

    let options = pipeline::RunOptions {
        fail_fast: cli.fail_fast,
    };
    let stats = pipeline::run(&services.flatten, reader, writer, options).await?;

    info!(
        records = stats.records_written,
        decode_failures = stats.decode_failures,
        invalid_envelopes = stats.invalid_envelopes,
        "dnstap-flat finished"
    );
    Ok(())
}
