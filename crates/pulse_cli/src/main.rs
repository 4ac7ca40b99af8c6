use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;
use pulse_client::{HttpBackend, RequestController, SummaryBackend};
use pulse_core::prelude::*;
use pulse_core::{DEFAULT_NUM_RESULTS, DEFAULT_QUERY};
use tracing::info;

mod logging;
mod render;

use render::{JsonView, Renderer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize the hottest tech news from the terminal", long_about = None)]
pub struct Cli {
    /// Base URL of the summarization backend (overrides PULSE_API_BASE)
    #[arg(long)]
    api_base: Option<String>,
    /// Log request details
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch a summary and its source articles
    Summarize {
        /// Topic or query
        #[arg(short, long, default_value = DEFAULT_QUERY)]
        query: String,
        /// Number of headlines, kept between 3 and 12
        #[arg(short, long, default_value_t = DEFAULT_NUM_RESULTS)]
        num_results: u32,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(api_base) = cli.api_base {
        config = config.with_api_base(api_base);
    }
    info!("🔌 Using backend at {}", config.api_base);
    let backend = Arc::new(HttpBackend::new(config));

    match cli.command {
        Commands::Health => {
            let status = backend.health().await?;
            println!("{}", status);
        }
        Commands::Summarize {
            query,
            num_results,
            json,
        } => {
            let controller = RequestController::new(backend);
            controller.set_query(query);
            controller.set_num_results(num_results);

            let mut rx = controller.subscribe();
            let indicator = async move {
                while rx.changed().await.is_ok() {
                    if rx.borrow_and_update().is_pending() {
                        eprintln!("Summarizing...");
                    } else {
                        break;
                    }
                }
            };
            tokio::join!(controller.submit_current(), indicator);

            let state = controller.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&JsonView::new(&state))?);
            } else {
                let stdout = std::io::stdout();
                let styled = stdout.is_terminal();
                Renderer::new(stdout.lock(), styled).render(&state)?;
            }

            if state.request_state == RequestState::Failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_defaults() {
        let cli = Cli::parse_from(["pulse", "summarize"]);
        match cli.command {
            Commands::Summarize {
                query,
                num_results,
                json,
            } => {
                assert_eq!(query, DEFAULT_QUERY);
                assert_eq!(num_results, DEFAULT_NUM_RESULTS);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "pulse",
            "--api-base",
            "http://news.local:9000",
            "-v",
            "summarize",
            "-q",
            "open source",
            "-n",
            "20",
            "--json",
        ]);
        assert_eq!(cli.api_base.as_deref(), Some("http://news.local:9000"));
        assert!(cli.verbose);
        match cli.command {
            Commands::Summarize { num_results, .. } => {
                // clamped later by the controller's input control
                assert_eq!(num_results, 20);
                let input = QueryInput::new("open source", num_results);
                assert_eq!(input.num_results, 12);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_health_command() {
        let cli = Cli::parse_from(["pulse", "health"]);
        assert!(matches!(cli.command, Commands::Health));
    }
}
