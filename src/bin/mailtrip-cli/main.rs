use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mailtrip_lib::{SmtpRelay, ThreadSleeper, TlsInbox, compose, run_probe};

mod args;
use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity, cli.smtp_debuglevel)?;

    let config = cli.into_config();
    let message = compose(&config);

    let relay = SmtpRelay::new(config.smtp.clone());
    let imap = config.imap.clone();
    let mut sleeper = ThreadSleeper;
    let report = run_probe(
        &config,
        &message,
        &relay,
        move || TlsInbox::connect(&imap),
        &mut sleeper,
    );

    println!("{report}");
    process::exit(report.status.exit_code());
}

/// Logs go to stderr; stdout is reserved for the plugin output.
fn init_tracing(verbosity: u8, smtp_debuglevel: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let mut filter = EnvFilter::try_new(level)?;
    if smtp_debuglevel > 0 {
        filter = filter.add_directive("lettre=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
