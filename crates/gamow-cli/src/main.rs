// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Gamow CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `gamow` command-line front end.
//!
//! Runs the reference reaction set, JSON batches, single Gamow peaks and
//! temperature scans. Results go to stdout, diagnostics to the tracing log.

use anyhow::{Context, Result};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gamow_core::gamow::{gamow_energy_corrected, RateCorrection};
use gamow_core::harness::{run_config, HarnessEntry};
use gamow_core::report::gamow_report;
use gamow_core::scan::{
    log_temperatures, rate_table, COL_DELTA, COL_E0, COL_RATE, COL_T6, COL_TAU,
};
use gamow_types::config::RunConfig;
use gamow_types::reaction::Reaction;

#[derive(Parser, Debug)]
#[command(name = "gamow")]
#[command(about = "Coulomb barriers, Sommerfeld factors and Gamow-peak reaction rates")]
#[command(version)]
struct Cli {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the built-in reference reaction set
    Reference,

    /// Evaluate a JSON run configuration
    Run {
        /// Path to the configuration file
        #[arg(short, long)]
        config: String,
    },

    /// Gamow peak and rate for one reaction
    Peak {
        a1: f64,
        z1: f64,
        a2: f64,
        z2: f64,
        /// Temperature [10^6 K]
        t6: f64,
        /// S-factor at E0 [keV b]
        #[arg(default_value_t = 0.0)]
        s_kevb: f64,
        /// Rate correction to request (none, ftau)
        #[arg(long, default_value = "none", value_parser = RateCorrection::from_str)]
        correction: RateCorrection,
    },

    /// Tabulate E0, delta, tau and rate over a log-spaced temperature grid
    Scan {
        a1: f64,
        z1: f64,
        a2: f64,
        z2: f64,
        /// S-factor at E0 [keV b]
        s_kevb: f64,
        #[arg(long, default_value_t = 1.0)]
        t6_min: f64,
        #[arg(long, default_value_t = 1000.0)]
        t6_max: f64,
        #[arg(long, default_value_t = 16)]
        points: usize,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_entries(entries: &[HarnessEntry]) {
    for entry in entries {
        if entry.summary.contains("[E>=Ec]") {
            tracing::warn!(call = %entry.call, "energy at or above the Coulomb barrier");
        }
        println!("{}", entry.line());
    }
}

fn run_batch(config: &RunConfig, source: &str) -> Result<()> {
    tracing::info!(source, cases = config.len(), r0_cm = config.r0_cm, "evaluating batch");
    let entries = run_config(config).with_context(|| format!("batch '{source}' failed"))?;
    print_entries(&entries);
    tracing::debug!(lines = entries.len(), "batch complete");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Reference => run_batch(&RunConfig::reference(), "reference"),
        Commands::Run { config } => {
            let cfg = RunConfig::from_file(&config)
                .with_context(|| format!("failed to load config '{config}'"))?;
            run_batch(&cfg, &config)
        }
        Commands::Peak {
            a1,
            z1,
            a2,
            z2,
            t6,
            s_kevb,
            correction,
        } => {
            let reaction = Reaction::new(a1, z1, a2, z2);
            tracing::info!(%reaction, t6, s_kevb, %correction, "gamow peak");
            let peak = gamow_energy_corrected(a1, z1, a2, z2, t6, s_kevb, correction)
                .with_context(|| format!("gamow peak for {reaction} failed"))?;
            tracing::debug!(tau = peak.tau, "peak exponent");
            println!("{reaction}: {}", gamow_report(&peak));
            Ok(())
        }
        Commands::Scan {
            a1,
            z1,
            a2,
            z2,
            s_kevb,
            t6_min,
            t6_max,
            points,
        } => {
            let reaction = Reaction::new(a1, z1, a2, z2);
            tracing::info!(%reaction, t6_min, t6_max, points, "temperature scan");
            let grid = log_temperatures(t6_min, t6_max, points)?;
            let table = rate_table(&reaction, &grid, s_kevb)
                .with_context(|| format!("scan for {reaction} failed"))?;
            println!(
                "{:>11} {:>11} {:>11} {:>11} {:>11}",
                "T6", "E0[keV]", "delta[keV]", "tau", "rate[cm3/s]"
            );
            for row in table.rows() {
                println!(
                    "{:>11.3e} {:>11.3e} {:>11.3e} {:>11.3e} {:>11.3e}",
                    row[COL_T6], row[COL_E0], row[COL_DELTA], row[COL_TAU], row[COL_RATE]
                );
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    run(cli)
}
