use clap::Parser;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use chatfood_log_analyzer::LogSource;
use chatfood_log_cli::analyze;
use chatfood_log_cli::cli::Cli;
use chatfood_log_cli::config::AppConfig;
use chatfood_log_cli::error::CliError;
use chatfood_log_cli::logging;
use chatfood_log_cli::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load(cli.config.as_deref()).await?;
    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
        config.validate()?;
    }

    logging::init_tracing(&config.general).map_err(|e| CliError::Config(e.to_string()))?;

    let source = LogSource::from_arg(&cli.log_file);
    info!(source = %source, output = ?cli.output_format(), "chatfood-log starting");

    // Ctrl-C는 라인 사이에서 분석을 멈추고 그때까지의 집계로 리포트를 낸다
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let writer = OutputWriter::new(cli.output_format());
    analyze::execute(&source, &config.analyzer, &writer, cancel).await?;

    Ok(())
}
