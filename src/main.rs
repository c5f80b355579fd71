use clap::Parser;
use shopify_token_probe::utils::{logger, validation::Validate};
use shopify_token_probe::{has_transport_failure, CliConfig, OauthTokenRequester, ProbeRunner};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shopify-token-probe");
    if config.verbose {
        tracing::debug!("Timeout: {}s", config.timeout_secs);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let requester = OauthTokenRequester::new(Duration::from_secs(config.timeout_secs))?;
    let accounts = config.accounts();

    let stdout = std::io::stdout();
    let mut runner = ProbeRunner::new(requester, stdout.lock());
    let reports = runner.run(&accounts).await?;

    if has_transport_failure(&reports) {
        tracing::error!("One or more token endpoints were unreachable");
        std::process::exit(1);
    }

    tracing::info!("All token probes completed");
    Ok(())
}
