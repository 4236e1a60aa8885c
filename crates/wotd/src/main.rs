// Copyright 2026 wotd Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wotd::cli;

#[derive(Parser)]
#[command(
    name = "wotd",
    about = "wotd — post today's word of the day to a chat webhook",
    version,
    after_help = "Run 'wotd <command> --help' for details on each command.\nSchedule 'wotd send <language>' once a day with cron or a systemd timer."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch today's word and post it, unless it was already sent
    Send {
        /// Language name (e.g. "spanish", "japanese")
        language: String,
        /// Destination format: discord or slack [env: WOTD_DESTINATION]
        #[arg(long)]
        destination: Option<String>,
        /// Webhook URL [env: WOTD_WEBHOOK_URL]
        #[arg(long)]
        webhook: Option<String>,
        /// Ledger of sent words [env: WOTD_LEDGER_PATH]
        #[arg(long)]
        ledger: Option<PathBuf>,
    },
    /// Fetch today's word and print the payload without sending it
    Preview {
        /// Language name (e.g. "spanish", "japanese")
        language: String,
        /// Destination format: discord or slack
        #[arg(long)]
        destination: Option<String>,
    },
    /// List how each language is sourced
    Languages,
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("WOTD_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("WOTD_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("WOTD_VERBOSE", "1");
    }
    cli::output::init_tracing();

    let result = match cli.command {
        Commands::Send {
            language,
            destination,
            webhook,
            ledger,
        } => {
            cli::send_cmd::run(
                &language,
                destination.as_deref(),
                webhook.as_deref(),
                ledger,
            )
            .await
        }
        Commands::Preview {
            language,
            destination,
        } => cli::preview_cmd::run(&language, destination.as_deref()).await,
        Commands::Languages => cli::languages_cmd::run().await,
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "wotd", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        } else if !cli::output::is_quiet() {
            eprintln!("  Error: {e:#}");
        }
        std::process::exit(1);
    }

    result
}
