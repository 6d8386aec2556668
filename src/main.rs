use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cmd;

use cmd::{LaunchArgs, handle_launch};

#[derive(Parser, Debug)]
#[command(name = "horserace")]
#[command(author = "Armin Graf")]
#[command(version)]
#[command(about = "Start a horse race workflow on Amazon Simple Workflow Service", long_about = None)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,
}

/// Initialize tracing/logging with indicatif integration
fn init_tracing(verbose: bool) {
    let indicatif_layer = tracing_indicatif::IndicatifLayer::new();

    let filter_layer = if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("horserace=debug,info"))
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.launch.verbose);

    match handle_launch(cli.launch).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            horserace::output::format_error(&e);
            ExitCode::FAILURE
        }
    }
}
