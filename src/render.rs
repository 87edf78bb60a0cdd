//! Terminal and JSON rendering of a finished report.

use anyhow::{Context, Result};
use colored::*;

use crate::report::{Report, SCORE_SCALE};

#[derive(Clone, Copy)]
enum InsightLevel {
    Good,
    Warning,
    Critical,
}

fn level_for(score: u8, max: u8) -> InsightLevel {
    let ratio = score as f32 / max.max(1) as f32;
    if ratio >= 0.75 {
        InsightLevel::Good
    } else if ratio >= 0.5 {
        InsightLevel::Warning
    } else {
        InsightLevel::Critical
    }
}

fn stylize(message: &str, level: InsightLevel) -> ColoredString {
    match level {
        InsightLevel::Good => message.green(),
        InsightLevel::Warning => message.yellow(),
        InsightLevel::Critical => message.red().bold(),
    }
}

pub fn print_banner() {
    println!("{}", format!("🐧 sys-doctor v{}", env!("CARGO_PKG_VERSION")).bold().cyan());
    println!("Smart Linux System Health Analyzer");
    println!("{}", "-".repeat(45));
}

pub fn print_report(report: &Report) {
    if let Some(host) = &report.host {
        println!(
            "{}",
            format!(
                "{} | {} | kernel {} | {}",
                host.hostname,
                host.distro,
                host.kernel.as_deref().unwrap_or("unknown"),
                host.generated_at
            )
            .dimmed()
        );
    }

    if let Some(err) = &report.install_error {
        println!("{}", format!("❌ {err}").red());
    } else if !report.tools_ready {
        println!("{}", "ℹ️ Skipping tests whose tools are missing.".dimmed());
    }

    println!("\n{}", "🧾 RESULTS".bold());
    println!("{}", "-".repeat(30));
    for entry in &report.entries {
        println!(
            "{}",
            stylize(&entry.line, level_for(entry.score, entry.max_score))
        );
    }
    for skipped in &report.skipped {
        println!(
            "{}",
            format!("{:<4}: skipped ({})", skipped.subsystem.label(), skipped.reason).yellow()
        );
    }

    println!(
        "\n{}",
        format!("TOTAL SCORE: {}/{}", report.total, SCORE_SCALE).bold()
    );
    if report.possible > 0 && report.possible < SCORE_SCALE {
        println!(
            "{}",
            format!("(maximum for the tested subsystems: {})", report.possible).dimmed()
        );
    }

    println!("\n{}", "SUGGESTIONS:".bold());
    for tip in &report.suggestions {
        println!("- {tip}");
    }
}

pub fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Unable to serialize report")?;
    println!("{json}");
    Ok(())
}
