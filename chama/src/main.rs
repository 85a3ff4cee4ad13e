/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use chama::config::ConfigManager;
use chama::dashboard::Dashboard;
use chama::rotation;
use chama::store::{FileStore, PeriodStore, RosterStore};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Chama rotating-savings group manager.
///
/// Example:
///   chama --config chama.yaml register --name "Alice K." --contact alice@jobil.com
///   chama schedule --member alice@jobil.com
#[derive(Debug, Parser)]
#[command(
    name = "chama",
    about = "Chama rotating-savings group – payout rotation and schedule",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML group configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON state file (overrides `state_path` from the config).
    #[arg(short = 's', long = "state", global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new member at the end of the rotation.
    Register {
        #[arg(short = 'n', long)]
        name: String,
        /// Unique contact identifier (e-mail).
        #[arg(short = 'e', long)]
        contact: String,
    },

    /// List members in rotation order.
    Roster,

    /// Show the recipient for a period (default: the current period).
    Recipient {
        #[arg(short = 'p', long, allow_negative_numbers = true)]
        period: Option<i64>,
    },

    /// Show the dashboard and payout schedule.
    Schedule {
        /// Number of full rotations to show (overrides the config).
        #[arg(short = 'H', long)]
        horizon: Option<u32>,
        /// Contact of the member viewing the dashboard.
        #[arg(short = 'm', long)]
        member: Option<String>,
    },

    /// Close the current period and move to the next one.
    Advance,

    /// Fill an empty roster with ten demo members.
    SeedDemo,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // ── Load group configuration ──────────────────────────────────────────────
    let mut config_manager = ConfigManager::new();
    match &cli.config {
        Some(path) => config_manager.load_from_file(path)?,
        None => warn!("No group configuration file provided, using default settings"),
    }
    let config = config_manager.config();

    let state_path = cli.state.clone().unwrap_or_else(|| config.state_path.clone());
    info!(
        group = %config.name,
        state = %state_path.display(),
        "Configuration"
    );

    // ── Open the group store ──────────────────────────────────────────────────
    let mut store = FileStore::open(&state_path)
        .with_context(|| format!("Cannot open group state: {}", state_path.display()))?;

    match cli.command {
        Command::Register { name, contact } => {
            let member = store.register(&name, &contact)?;
            println!("Registration successful! You are Member #{}", member.id);
        }

        Command::Roster => {
            if store.members().is_empty() {
                println!("No members registered.");
            }
            for m in store.members() {
                println!(
                    "{:>4}  {:<20} {:<32} received {}",
                    m.id.get(),
                    m.name,
                    m.contact,
                    m.periods_received
                );
            }
        }

        Command::Recipient { period } => {
            let period = match period {
                Some(p) => p,
                None => i64::try_from(store.current_period())
                    .context("Stored period counter is out of range")?,
            };
            let member = rotation::recipient_for(period, store.members())
                .with_context(|| format!("Cannot resolve recipient for period {period}"))?;
            println!("Week {period}: {member}");
        }

        Command::Schedule { horizon, member } => {
            let horizon = horizon.unwrap_or(config.horizon_cycles);
            let dashboard = Dashboard::build(&store, config, horizon, member.as_deref())
                .context("Cannot build schedule")?;
            print!("{}", dashboard.render());
        }

        Command::Advance => {
            let period = store.advance_period()?;
            let period_i = i64::try_from(period).context("Period counter is out of range")?;
            match rotation::recipient_for(period_i, store.members()) {
                Ok(m) => println!(
                    "System advanced to Week {period}. The new recipient is {}",
                    m.name
                ),
                Err(e) => {
                    warn!("{e}");
                    println!("System advanced to Week {period}. The new recipient is N/A");
                }
            }
        }

        Command::SeedDemo => {
            let added = store.seed_demo()?;
            println!("Initialized {added} demo members.");
        }
    }

    Ok(())
}
