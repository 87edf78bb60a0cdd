use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod advice;
mod collectors;
mod config;
mod deps;
mod error;
mod host;
mod metrics;
mod parsers;
mod registry;
mod render;
mod report;
mod scoring;
#[cfg(test)]
mod testing;

use config::Config;
use host::{LocalHost, PackageInstaller};
use registry::{SelectionSet, Subsystem};
use report::{Collaborators, HostSummary};

const PERFORMANCE_TARGET_MS: u128 = 2_000;

#[derive(Parser)]
#[command(
    name = "sys-doctor",
    version,
    about = "Smart Linux system health analyzer (CPU / GPU / RAM / Disk)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Install missing tools without asking
    #[arg(long, short = 'y', conflicts_with = "no_install")]
    yes: bool,
    /// Never install missing tools; skip the tests that need them
    #[arg(long)]
    no_install: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Config file (default: ~/.config/sys-doctor/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Test everything
    All,
    /// Core count and max clock (lscpu)
    Cpu,
    /// Adapter class and OpenGL renderer (lspci, glxinfo)
    Gpu,
    /// Installed memory (/proc/meminfo)
    Ram,
    /// SMART health of every block device
    Disk,
    /// List the external tools and whether they are installed
    CheckDeps,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let start_time = std::time::Instant::now();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Unable to load configuration")?;
    let host = LocalHost;

    if !cli.json {
        render::print_banner();
    }

    let selection = match cli.command {
        Some(Commands::CheckDeps) => {
            deps::check_deps(&config.registry, &host);
            return Ok(());
        }
        Some(Commands::All) => SelectionSet::all(),
        Some(Commands::Cpu) => [Subsystem::Cpu].into_iter().collect(),
        Some(Commands::Gpu) => [Subsystem::Gpu].into_iter().collect(),
        Some(Commands::Ram) => [Subsystem::Ram].into_iter().collect(),
        Some(Commands::Disk) => [Subsystem::Disk].into_iter().collect(),
        None => match choose_tests()? {
            Some(selection) => selection,
            None => {
                println!("{}", "❌ Invalid choice".red());
                return Ok(());
            }
        },
    };

    let installer = PackageInstaller::new(config.install.clone());
    let mut confirm = |missing: &BTreeMap<String, String>| ask_install(&cli, missing);

    let report = report::run(
        &selection,
        Collaborators {
            registry: &config.registry,
            host: &host,
            installer: &installer,
            confirm: &mut confirm,
        },
    )
    .with_host(HostSummary::detect());

    if cli.json {
        render::print_json(&report)?;
    } else {
        render::print_report(&report);
    }

    let elapsed = start_time.elapsed();
    if env::var("SYS_DOCTOR_BENCHMARK").is_ok() {
        eprintln!("⏱️  Execution time: {:.0}ms", elapsed.as_millis());
        if elapsed.as_millis() > PERFORMANCE_TARGET_MS {
            eprintln!(
                "⚠️  Warning: Exceeded {}ms target ({:.0}ms)",
                PERFORMANCE_TARGET_MS,
                elapsed.as_millis()
            );
        }
    } else {
        debug!(elapsed_ms = elapsed.as_millis() as u64, "run finished");
    }

    Ok(())
}

/// Interactive menu used when no subcommand is given. `None` when nothing was picked.
fn choose_tests() -> Result<Option<SelectionSet>> {
    let items = ["CPU", "GPU", "RAM", "Disk (SMART)", "Full system"];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select tests to run")
        .items(&items)
        .default(4)
        .interact_opt()
        .context("Unable to read test selection")?;

    Ok(choice.and_then(|idx| match idx {
        0 => Some([Subsystem::Cpu].into_iter().collect()),
        1 => Some([Subsystem::Gpu].into_iter().collect()),
        2 => Some([Subsystem::Ram].into_iter().collect()),
        3 => Some([Subsystem::Disk].into_iter().collect()),
        4 => Some(SelectionSet::all()),
        _ => None,
    }))
}

/// Show the missing tools and decide whether to install them.
fn ask_install(cli: &Cli, missing: &BTreeMap<String, String>) -> bool {
    let mut listing = format!("\n{}\n", "⚠️ Missing tools for selected tests:".yellow().bold());
    for (cmd, pkg) in missing {
        listing.push_str(&format!(" - {} ({})\n", cmd.yellow(), pkg));
    }
    // Keep stdout clean for JSON consumers.
    if cli.json {
        eprint!("{listing}");
    } else {
        print!("{listing}");
    }

    if cli.yes {
        return true;
    }
    if cli.no_install {
        return false;
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Install missing tools now?")
        .default(false)
        .interact()
        .unwrap_or_else(|e| {
            warn!(error = %e, "no answer to install prompt, declining");
            false
        })
}
