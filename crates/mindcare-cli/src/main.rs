use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindcare_cli::cli::Cli;
use mindcare_cli::commands::{self, Context};
use mindcare_cli::config;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so command output on stdout stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if std::env::var_os("MINDCARE_LOG_JSON").is_some() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let cli = Cli::parse();
    let ctx = Context::resolve(&cli, config::config_dir()?)?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "starting");

    let mut stdout = std::io::stdout().lock();
    commands::run(cli.command, &ctx, &mut stdout)
}
