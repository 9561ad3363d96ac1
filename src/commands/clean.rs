//! Clean command implementation.

use crate::cleaner::{remove_all, summarize, AcceptAll, ConfirmGate, RemoveOutcome};
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::scanner::scan;
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{self, Write};
use std::path::Path;

/// Gate that asks for a per-path answer on stdin.
struct StdinGate;

impl ConfirmGate for StdinGate {
    fn confirm(&mut self, path: &Path) -> bool {
        print!("Delete {}? [y/N] ", path.display());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        input.trim().eq_ignore_ascii_case("y")
    }
}

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config) -> Result<()> {
    // Resolve to absolute path
    let path = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());

    let options = super::scan_options(&args.target, args.max_depth, config);

    println!("Scanning for dependency caches in {}...", path.display());
    let mut matches = scan(&path, &options);
    matches.sort_by(|a, b| a.path.cmp(&b.path));

    if matches.is_empty() {
        println!("No dependency caches found.");
        return Ok(());
    }

    super::print_matches_table(&matches);

    let total_size: u64 = matches.iter().map(|m| m.size).sum();
    println!(
        "\nTotal: {} in {} folder{}\n",
        format_size(total_size, BINARY),
        matches.len(),
        if matches.len() == 1 { "" } else { "s" }
    );

    let skip_prompts = args.force || !config.cleaner.require_confirmation;
    let mut gate: Box<dyn ConfirmGate> = if skip_prompts {
        Box::new(AcceptAll)
    } else {
        Box::new(StdinGate)
    };

    let results = remove_all(&matches, gate.as_mut());
    let summary = summarize(&results);

    // Print results
    println!("\nResults:");
    println!(
        "  Removed:  {} folder{}",
        summary.removed_count,
        if summary.removed_count == 1 { "" } else { "s" }
    );
    if summary.declined_count > 0 {
        println!(
            "  Declined: {} folder{}",
            summary.declined_count,
            if summary.declined_count == 1 { "" } else { "s" }
        );
    }
    if summary.missing_count > 0 {
        println!(
            "  Missing:  {} folder{}",
            summary.missing_count,
            if summary.missing_count == 1 { "" } else { "s" }
        );
    }
    if summary.failed_count > 0 {
        println!(
            "  Failed:   {} folder{}",
            summary.failed_count,
            if summary.failed_count == 1 { "" } else { "s" }
        );
    }
    println!("  Freed:    {}", format_size(summary.total_freed, BINARY));

    // Print failures
    for result in &results {
        if let RemoveOutcome::Failed { path, error } = result {
            eprintln!("  Error removing {}: {}", path.display(), error);
        }
    }

    if summary.failed_count > 0 {
        std::process::exit(5); // Partial failure
    }

    Ok(())
}
