//! `medibot` -- interactive medical triage assistant.
//!
//! Offers an emergency assistance conversation and a vital signs monitoring
//! mode. Abnormal vitals raise an alert to a fixed destination through the
//! configured notification channel. See [`medibot_cli::config::AppConfig`]
//! for the environment variables.
//!
//! Logs go to stderr so they do not interleave with the console on stdout.

use medibot_cli::config::AppConfig;
use medibot_cli::console::Console;
use medibot_cli::wiring;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "medibot_cli=info,medibot_pipeline=info,medibot_events=info,medibot_llm=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        model = %config.chat.model,
        base_url = %config.chat.base_url,
        destination = %config.alert_destination,
        "Starting medibot",
    );

    let (generator, pipeline) = wiring::build(&config)?;

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        generator,
        pipeline,
    );
    console.run().await?;

    tracing::info!("Session ended");
    Ok(())
}
