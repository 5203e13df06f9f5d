//! # navkit-demo Entry Point
//!
//! Parses arguments, installs logging, and dispatches to the library.

use std::time::Duration;

use clap::Parser;

use navkit_core::NavigationConfig;
use navkit_demo::routes::route_table;
use navkit_demo::scenario::Session;

/// navkit example app.
///
/// Runs a scripted navigation session or prints the route table, as JSON.
#[derive(Parser, Debug)]
#[command(name = "navkit-demo", version, about)]
struct Cli {
    /// Flow-switch fallback delay in milliseconds. Overrides
    /// NAVKIT_FLOW_SWITCH_DELAY_MS.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the scripted session and print one snapshot per step.
    Scenario {
        /// Print only the final snapshot.
        #[arg(long)]
        last: bool,
    },
    /// Print every route kind with its overlay slot and detents.
    Routes,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logs = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    let mut config = NavigationConfig::from_env()?;
    if let Some(ms) = cli.delay_ms {
        config = config.with_flow_switch_delay(Duration::from_millis(ms));
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Scenario { last } => {
            let snapshots = Session::new(config).run().await?;
            let output = if last {
                serde_json::to_string_pretty(&snapshots.last())?
            } else {
                serde_json::to_string_pretty(&snapshots)?
            };
            println!("{output}");
        }
        Commands::Routes => {
            println!("{}", serde_json::to_string_pretty(&route_table())?);
        }
    }

    Ok(())
}
